use tidefac::{ForcingRequest, HarmonicDataset, StaticCacheDir, TideError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), TideError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let table = ForcingRequest::new("2020-01-01T00:00", "2020-02-01T00:00").build()?;
    let epoch = table.epoch();

    println!("epoch: {epoch}");
    println!("record span: {:.2} days", epoch.record_days().value());

    let dataset = HarmonicDataset::TPXO9;
    let cache = StaticCacheDir::new(std::env::temp_dir());
    println!(
        "harmonic dataset {}: {}",
        dataset.file_name(),
        dataset.locate(&cache).display()
    );

    println!("{:>4} {:>22} {:>10} {:>10}", "code", "ω [rad/s]", "f", "V0+u [°]");
    for c in &table {
        println!(
            "{:>4} {:>22.16e} {:>10.6} {:>10.4}",
            c.code, c.orbital_frequency, c.nodal_factor, c.greenwich_term
        );
    }
    Ok(())
}
