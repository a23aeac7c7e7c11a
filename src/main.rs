use ingredient_import::extract_from_url;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Get the URL from command-line arguments
    let args: Vec<String> = env::args().collect();
    let url = args.get(1).ok_or("usage: ingredient-import <url>")?;

    let recipe = extract_from_url(url)?;
    println!("{}", serde_json::to_string_pretty(&recipe.ingredients)?);

    Ok(())
}
