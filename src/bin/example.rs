use link_cut_forest::{LinkCutTree, SumLinkCutTree};

fn link(t: &mut SumLinkCutTree, u: usize, v: usize) {
    println!("Linking {} to {}", u, v);
    t.link(u, v);
}

fn cut(t: &mut SumLinkCutTree, u: usize, v: usize) {
    println!("Cutting edge between {} and {}", u, v);
    t.cut(u, v);
}

fn path_sum(t: &mut SumLinkCutTree, u: usize, v: usize, expected: &str) {
    match t.path_sum(u, v) {
        Some(sum) => println!("Path sum from {} to {} is {} (expected {})", u, v, sum, expected),
        None => println!("{} and {} are not connected", u, v),
    }
}

fn connected(t: &mut SumLinkCutTree, u: usize, v: usize) {
    println!(
        "Are {} and {} connected? {}",
        u,
        v,
        if t.connected(u, v) { "Yes" } else { "No" }
    );
}

fn main() {
    // Index 0 is unused so vertices match their values.
    let mut t = SumLinkCutTree::from_values([0, 1, 2, 3, 4, 5, 6, 7]);
    for (u, v) in [(1, 2), (2, 3), (3, 4), (3, 5), (5, 6), (2, 7)] {
        link(&mut t, u, v);
    }
    path_sum(&mut t, 1, 4, "1+2+3+4 = 10");
    path_sum(&mut t, 6, 7, "6+5+3+2+7 = 23");
    println!("Setting the value of 3 to 30");
    t.update_value(3, 30);
    path_sum(&mut t, 1, 4, "1+2+30+4 = 37");
    path_sum(&mut t, 6, 7, "6+5+30+2+7 = 50");
    cut(&mut t, 3, 5);
    connected(&mut t, 6, 1);
    link(&mut t, 6, 4);
    connected(&mut t, 6, 1);
    path_sum(&mut t, 6, 1, "6+4+30+2+1 = 43");
}
