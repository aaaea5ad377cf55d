//! Derive a rotation set for one seed, then print benchmark metrics.
//!
//! ```text
//! cargo run --example ctx_profile -- "tenant-42@example.com"
//! ```

use pbctx_kdf::{CtxDeriver, DeriveConfig, KeyEncoding, Seed};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "investor-preview@example.com".to_owned());
    let seed = Seed::from(raw.as_str()).validate()?;

    let deriver = CtxDeriver::new(DeriveConfig::default().with_encoding(KeyEncoding::Base64));
    let rotation = deriver.derive_batch_with_metadata(&seed, 4).await?;

    println!("CTX rotation set for seed: {raw}");
    for entry in &rotation {
        println!("- [{}] ({}) => {}", entry.info, entry.encoding, entry.key);
    }

    let metrics = deriver.benchmark(&seed, 200).await?;
    println!("\nBenchmark metrics:");
    println!("{}", serde_json::to_string_pretty(&metrics)?);
    Ok(())
}
