//! Builds a few sets and prints the results of the set algebra.

use bitset_algebra::prelude::*;
use bitset_algebra::{output, RenderStyle};

fn main() -> Result<(), BitSetError> {
    let mut a = BitSet::new(10)?;
    a.insert_many([2, 5, 9])?;
    let b = bitset![5; 1, 3];

    print!("A       = ");
    a.print(output::stdout)?;
    print!("B       = ");
    b.print(output::stdout)?;

    print!("A ∪ B   = ");
    a.union(&b)?.print(output::stdout)?;
    print!("A ∩ B   = ");
    a.intersection(&b)?.print(output::stdout)?;
    print!("A − B   = ");
    a.difference(&b)?.print(output::stdout)?;
    print!("A △ B   = ");
    a.symmetric_difference(&b)?.print(output::stdout)?;
    print!("¬A      = ");
    a.complement()?.print(output::stdout)?;
    print!("A bits  = ");
    a.print_with(RenderStyle::Bits, output::stdout)?;

    // Rejected elements are skipped, the valid ones still land.
    match a.insert_many([3i64, -1, 12]) {
        Ok(added) => println!("added {} elements", added),
        Err(err) => println!("batch: {} ({:?})", err, err.kind()),
    }
    println!("A       = {}", a);

    Ok(())
}
