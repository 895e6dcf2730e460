use traitdata::traitdef;

#[traitdef(id = "test:Enum")]
pub enum NotAStruct {
    Variant,
}

fn main() {}
