// Pulls in the core container and the whole trait library to check both
// resolve and build together.
use traitdata::TraitsData;

use mediacreation::traits;

fn main() {
    let managed = traits::management_policy::ManagedTrait::new(TraitsData::make());

    managed.imbue();
}
