use crate::config::ApplicationConfig;
use anyhow::Result;
use tabcloak_core::csv::write_csv;
use tabcloak_generator::{GeneratorConfig, PatientGenerator};
use tabcloak_storage::{BlobStore, FsBlobStore};
use tracing::info;

pub async fn run(config: &ApplicationConfig) -> Result<()> {
    let mut generator = PatientGenerator::new(GeneratorConfig {
        record_count: config.record_count,
        seed: config.seed,
        ..GeneratorConfig::default()
    });

    let data = generator.generate()?;
    let content = write_csv(&data)?;

    let store = FsBlobStore::new(&config.storage.root);
    store.store(&config.source_file, &content).await?;

    info!(
        records = data.num_rows(),
        blob = %config.source_file,
        "generated dataset stored"
    );

    Ok(())
}
