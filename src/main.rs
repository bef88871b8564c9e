use attack_tables::{build_all, utils::get_set_bit_mask_iter};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    for (kind, table) in build_all() {
        let targets: usize = table.iter().map(|(_, mask)| get_set_bit_mask_iter(mask).len()).sum();
        info!(table = %kind, entries = table.len(), targets, "generated");
    }
}
