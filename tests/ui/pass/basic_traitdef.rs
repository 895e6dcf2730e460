use traitdata::{traitdef, TraitsData};

// A trait with no properties
#[traitdef(id = "test:Marker")]
struct MarkerTrait;

fn main() {
    let data = TraitsData::make();
    let marker = MarkerTrait::new(data.clone());
    assert!(!marker.is_imbued());
    marker.imbue();
    assert!(MarkerTrait::is_imbued_to(&data));
    assert_eq!(data.trait_property_keys(MarkerTrait::ID).len(), 0);
}
