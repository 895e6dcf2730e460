use traitdata::{specdef, traitdef, TraitsData};

#[traitdef(id = "test:Entity")]
pub struct EntityTrait;

#[traitdef(id = "test:Named")]
pub struct NamedTrait {
    name: String,
}

#[specdef]
pub struct NamedEntitySpecification {
    entity: EntityTrait,
    named: NamedTrait,
}

fn main() {
    let spec = NamedEntitySpecification::create();
    spec.named().set_name("shot010".to_string());
    assert!(spec.entity().is_imbued());
    assert_eq!(spec.named().name().unwrap().as_deref(), Some("shot010"));
    assert_eq!(NamedEntitySpecification::trait_set().len(), 2);

    let partial = TraitsData::make_with_traits(["test:Entity"]);
    assert!(NamedEntitySpecification::try_wrap(partial).is_err());
}
