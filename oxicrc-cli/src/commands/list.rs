//! List command implementation.

use oxicrc_core::pmul::Clmul;
use oxicrc_kernels::{Crc32cKernel, DefaultKernel, KERNELS, Kernel};
use serde::Serialize;

/// JSON serializable kernel data.
#[derive(Debug, Serialize)]
struct KernelJson {
    name: &'static str,
    strategy: &'static str,
    description: &'static str,
    default: bool,
}

impl KernelJson {
    fn from_kernel(kernel: &Kernel) -> Self {
        Self {
            name: kernel.name,
            strategy: kernel.strategy.as_str(),
            description: kernel.description,
            default: kernel.name == DefaultKernel::NAME,
        }
    }
}

/// JSON output for the kernel listing.
#[derive(Debug, Serialize)]
struct KernelListJson {
    hardware_clmul: bool,
    default_kernel: &'static str,
    kernels: Vec<KernelJson>,
}

pub fn cmd_list(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let listing = KernelListJson {
            hardware_clmul: Clmul::HARDWARE,
            default_kernel: DefaultKernel::NAME,
            kernels: KERNELS.iter().map(KernelJson::from_kernel).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{:<36} {:<10} Description", "Name", "Strategy");
    println!("{}", "-".repeat(90));
    for kernel in KERNELS {
        let marker = if kernel.name == DefaultKernel::NAME {
            " (default)"
        } else {
            ""
        };
        println!(
            "{:<36} {:<10} {}{}",
            kernel.name, kernel.strategy, kernel.description, marker
        );
    }
    println!();
    println!(
        "Hardware carry-less multiply: {}",
        if Clmul::HARDWARE {
            "compiled in"
        } else {
            "not available (software fallback)"
        }
    );

    Ok(())
}
