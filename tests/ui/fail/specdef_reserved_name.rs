#![allow(dead_code)]

use traitdata::{specdef, traitdef};

#[traitdef(id = "test:Entity")]
pub struct EntityTrait;

#[specdef]
pub struct ReservedSpecification {
    create: EntityTrait,
}

fn main() {}
