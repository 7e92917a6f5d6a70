// Embeds build metadata (version, commit, rustc) used by `product-api --version`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    shadow_rs::ShadowBuilder::builder().build()?;

    Ok(())
}
