use traitdata::traitdef;

#[traitdef(id = "test:Generic")]
pub struct GenericTrait<T> {
    value: T,
}

fn main() {}
