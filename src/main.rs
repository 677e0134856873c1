use treelib::linked::Tree;

fn main() {
    let mut tree = Tree::new();
    for value in [8, 3, 10, 1, 6, 4, 7, 14, 16].iter() {
        tree.add(*value);
    }

    print!("{}", tree);

    println!("{}", "-".repeat(40));
    tree.remove(&3);
    print!("{}", tree);

    println!("{}", "-".repeat(40));
    tree.remove(&8);
    print!("{}", tree);
}
