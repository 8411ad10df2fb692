use treecmp::{Node, Tree};

use crate::Op;

/// Builds a tree by inserting the values in order.
fn build(xs: &[i8]) -> Tree {
    xs.iter().map(|&x| i32::from(x)).collect()
}

/// Sorted copy of the values, i.e. the in-order sequence of [`build`].
fn sorted(xs: &[i8]) -> Vec<i8> {
    let mut xs = xs.to_vec();
    xs.sort_unstable();
    xs
}

/// Builds a left-leaning chain whose in-order sequence is `xs` sorted.
/// No `insert` is involved so this gives a second, independent shape.
fn left_chain(xs: &[i8]) -> Tree {
    let mut root: Option<Node> = None;
    for x in sorted(xs) {
        let mut parent = Node::new(i32::from(x));
        if let Some(child) = root.take() {
            parent.set_left(child);
        }
        root = Some(parent);
    }
    root.map(Tree::from).unwrap_or_default()
}

/// Applies a set of operations to a tree and a vector of expected values.
/// This way we can ensure that after a random smattering of inserts
/// and resets the tree still agrees with the model.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree, model: &mut Vec<i8>) -> bool {
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(i32::from(*x));
                model.push(*x);
            }
            Op::TakeRoot => {
                let taken = tree.take_root().map_or(0, |root| root.len());
                if taken != model.len() {
                    return false;
                }
                model.clear();
            }
            Op::Compare => {
                if *tree != left_chain(model) {
                    return false;
                }
            }
        }
        if tree.len() != model.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model) && tree == build(&model)
}

#[quickcheck]
fn reflexive(xs: Vec<i8>) -> bool {
    let tree = build(&xs);
    tree.equals(&tree)
}

#[quickcheck]
fn symmetric(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let a = build(&xs);
    let b = build(&ys);
    a.equals(&b) == b.equals(&a)
}

#[quickcheck]
fn equal_iff_same_sorted_values(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    build(&xs).equals(&build(&ys)) == (sorted(&xs) == sorted(&ys))
}

#[quickcheck]
fn insertion_order_does_not_matter(xs: Vec<i8>) -> bool {
    let mut reversed = xs.clone();
    reversed.reverse();

    build(&xs) == build(&reversed) && build(&xs) == build(&sorted(&xs))
}

#[quickcheck]
fn shape_does_not_matter(xs: Vec<i8>) -> bool {
    let chain = left_chain(&xs);
    let inserted = build(&xs);

    chain.len() == xs.len() && chain == inserted && inserted == chain
}

#[quickcheck]
fn one_changed_value_is_unequal(xs: Vec<i8>, index: usize) -> bool {
    if xs.is_empty() {
        return true;
    }
    let mut changed: Vec<i32> = xs.iter().map(|&x| i32::from(x)).collect();
    // Outside the `i8` range so it can't already be present.
    changed[index % xs.len()] = 1_000;

    build(&xs) != changed.into_iter().collect::<Tree>()
}
