//! Check a square boundary and a few query points.
//!
//! Usage:
//!   cargo run -p geopred --example square

use geopred::prelude::*;

fn main() {
    let sq = Polygon::from_ring(&[
        point![0.0, 0.0],
        point![3.0, 0.0],
        point![3.0, 3.0],
        point![0.0, 3.0],
    ]);
    println!("closed: {:?}", sq.is_closed());
    println!("simple: {:?}", sq.is_simple());
    for p in [point![0.5, -0.5], point![1.5, 1.5], point![1.5, 0.0]] {
        println!(
            "({}, {}): {:?}, contains={:?}, strictly={:?}",
            p.x,
            p.y,
            sq.locate(&p),
            sq.contains(&p, false),
            sq.contains(&p, true)
        );
    }
}
