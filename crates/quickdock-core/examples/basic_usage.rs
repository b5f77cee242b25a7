//! Basic usage example - manage a dock backed by a local settings file

use quickdock_core::{Dock, FileStore, Result, TargetId};

fn main() -> Result<()> {
    // Settings document path from args or a local default
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./quickdock-settings.json".to_string());

    println!("Using settings document: {}", path);

    let store = FileStore::new(&path, "lockscreen_targets");
    let mut dock = Dock::new(store);
    dock.load()?;

    if dock.is_empty() {
        println!("Dock is empty, adding sample targets...");
        dock.add(TargetId::new("com.vendor.mail")?)?;
        dock.add(TargetId::new("com.vendor.camera")?)?;
    }

    println!(
        "Dock holds {} of {} targets:",
        dock.len(),
        dock.limit()
    );
    for id in dock.targets()? {
        println!("  - {id}");
    }

    Ok(())
}
