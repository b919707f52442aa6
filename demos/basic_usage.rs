use anyhow::Context;
use vector_math::vector::{AngleUnit, Vector};

fn main() -> anyhow::Result<()> {
    println!("Vector Arithmetic Demo");
    println!("======================\n");

    let v = Vector::new(vec![1.0, 2.0, 3.0])?;
    let same = Vector::new(vec![1.0, 2.0, 3.0])?;
    let flipped = Vector::new(vec![-1.0, 2.0, 3.0])?;
    println!("{}", v);
    println!("  equal to {}: {}", same, v == same);
    println!("  equal to {}: {}", flipped, v == flipped);

    println!("\nAddition and subtraction");
    let v = Vector::new(vec![8.218, -9.341])?;
    let w = Vector::new(vec![-1.129, 2.111])?;
    println!("  {} + {} = {}", v, w, v.plus(&w)?);
    let v = Vector::new(vec![7.119, 8.215])?;
    let w = Vector::new(vec![-8.223, 0.878])?;
    println!("  {} - {} = {}", v, w, v.minus(&w)?);

    println!("\nScalar multiplication");
    let v = Vector::new(vec![1.671, -1.012, -0.318])?;
    println!("  7.41 * {} = {}", v, v.times_scalar(7.41));

    println!("\nMagnitude and direction");
    for coordinates in [
        vec![-0.221, 7.437],
        vec![8.813, -1.331, -6.247],
        vec![5.581, -2.136],
        vec![1.996, 3.108, -4.554],
    ] {
        let v = Vector::new(coordinates)?;
        let unit = v
            .normalized()
            .with_context(|| format!("normalizing {}", v))?;
        println!("  |{}| = {:.6}, direction {}", v, v.magnitude(), unit);
    }

    println!("\nDot products");
    let v = Vector::new(vec![7.887, 4.138])?;
    let w = Vector::new(vec![-8.802, 6.776])?;
    println!("  {} . {} = {:.6}", v, w, v.dot(&w)?);
    let v = Vector::new(vec![-5.955, -4.904, -1.874])?;
    let w = Vector::new(vec![-4.496, -8.755, 7.103])?;
    println!("  {} . {} = {:.6}", v, w, v.dot(&w)?);

    println!("\nAngles");
    let v = Vector::new(vec![3.183, -7.627])?;
    let w = Vector::new(vec![-2.668, 5.319])?;
    println!(
        "  {} and {}: {:.6} rad",
        v,
        w,
        v.angle_with(&w, AngleUnit::Radians)?
    );
    let v = Vector::new(vec![7.35, 0.221, 5.188])?;
    let w = Vector::new(vec![2.751, 8.259, 3.985])?;
    println!(
        "  {} and {}: {:.6} deg",
        v,
        w,
        v.angle_with(&w, AngleUnit::Degrees)?
    );

    println!("\nZero vector");
    let zero = Vector::zero(2)?;
    if let Err(e) = zero.normalized() {
        println!("  {}", e);
    }
    if let Err(e) = zero.angle_with(&w, AngleUnit::Radians) {
        println!("  {}", e);
    }

    println!("\nDemo completed successfully!");
    Ok(())
}
