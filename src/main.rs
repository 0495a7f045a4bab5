//! Solves the linear system given as `c1 c2 ... = k` lines in a file or on stdin.

use std::{
    env, fs,
    io::{self, Read},
};

use anyhow::{bail, Context};
use linsys::{Hyperplane, LinearSystem};

fn main() -> anyhow::Result<()> {
    linsys::init_logger!();

    let input = match env::args_os().nth(1) {
        Some(path) => fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.to_string_lossy()))?,
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            input
        }
    };

    let system = parse_system(&input)?;
    println!("{system}");

    let rref = system.compute_rref()?;
    println!("\nReduced row-echelon form:");
    for (i, plane) in rref.iter().enumerate() {
        println!("Equation {}: {plane}", i + 1);
    }

    println!("\nSolution: {:.3}", system.compute_solution()?);
    Ok(())
}

fn parse_system(input: &str) -> anyhow::Result<LinearSystem> {
    let mut planes = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let plane = line
            .parse::<Hyperplane>()
            .with_context(|| format!("invalid equation on line {}", i + 1))?;
        planes.push(plane);
    }

    if planes.is_empty() {
        bail!("no equations given");
    }
    Ok(LinearSystem::new(planes)?)
}
