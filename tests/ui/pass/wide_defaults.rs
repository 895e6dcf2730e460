use traitdata::{traitdef, TraitsData};

// Defaults outside the `i32` range must keep the property's own type.
#[traitdef(id = "test:Archive")]
pub struct ArchiveTrait {
    #[property(default = 5_000_000_000)]
    size: i64,
    #[property(default = 3_000_000_000)]
    duration_ms: f64,
    #[property(default = String::from("tar"))]
    format: String,
}

fn main() {
    let archive = ArchiveTrait::new(TraitsData::make());
    archive.imbue();
    assert_eq!(archive.size().unwrap(), Some(5_000_000_000));
    assert_eq!(archive.duration_ms().unwrap(), Some(3_000_000_000.0));
    assert_eq!(archive.format().unwrap().as_deref(), Some("tar"));
}
