use traitdata::traitdef;

#[traitdef(id = "test:Reserved")]
pub struct ReservedTrait {
    imbue: bool,
}

fn main() {}
