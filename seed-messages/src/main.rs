//! Binary: load env, generate an export, write JSON to stdout.

mod generate;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let export = generate::generate_export()?;
    let json = serde_json::to_string_pretty(&export)?;
    println!("{}", json);
    Ok(())
}
