//! `rcsel status` – show the stored choice and the active layout.

use rcsel_core::config::RcselConfig;
use rcsel_core::registry::RemoteLayoutRegistry;

pub fn run_status(cfg: &RcselConfig, registry: &RemoteLayoutRegistry) {
    if cfg.is_default_choice() {
        println!("Choice:  device default");
    } else {
        println!("Choice:  {}", cfg.remote);
    }
    let layout = registry.get();
    println!("Image:   {}", layout.image.display());
    println!("Mapping: {}", layout.mapping.display());
    if layout.fallback {
        println!("(files missing on disk; renderer uses its built-in default)");
    }
}
