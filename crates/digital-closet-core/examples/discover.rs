use digital_closet_core::{discovery, duplicates};
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Get directory to list from command line or use current directory
    let args: Vec<String> = env::args().collect();
    let directory = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        env::current_dir()?
    };

    println!("Listing directory: {}", directory.display());

    let identifiers = discovery::list_identifiers(&directory, true)?;

    // Print results in the order they would be browsed
    println!("Found {} images:", identifiers.len());
    for (i, name) in identifiers.iter().enumerate() {
        println!("{}: {}", i + 1, name);
    }

    let repeated = duplicates::find_duplicates(identifiers.iter());
    if !repeated.is_empty() {
        println!("Repeated names: {:?}", repeated);
    }

    Ok(())
}
