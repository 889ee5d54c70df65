//! Slot projection
//!
//! Content a template passes into a custom element's named slots is lowered as
//! a tree of its own (a synthetic `<template>` per slot) and handed to the
//! custom element through the `slotset` data-bag property. The nested lowering
//! gets its own frame stack but keeps the same handler memo slots and sees the
//! loop locals in scope at the custom element.

use super::Lowerer;
use crate::ast::{Expression, Property};
use crate::error::CompileResult;
use crate::ir::{CustomElement, Element};

impl<'a> Lowerer<'a> {
    /// Lower every slot of `custom`, or None if it projects nothing
    pub(crate) fn project_slots(
        &mut self,
        custom: &CustomElement,
        scope: &[String],
    ) -> CompileResult<Option<Property>> {
        if custom.slot_set.is_empty() {
            return Ok(None);
        }

        let mut slots = Vec::with_capacity(custom.slot_set.len());
        for (name, content) in &custom.slot_set {
            log::debug!(
                "projecting slot '{}' of <{}> ({} nodes)",
                name,
                custom.element.tag,
                content.len()
            );
            let synthetic = Element::synthetic_template(content.clone());
            let lowered = self.lower_tree(&synthetic, scope)?;
            slots.push(Property::new(name, lowered));
        }

        Ok(Some(Property::new("slotset", Expression::object(slots))))
    }
}
