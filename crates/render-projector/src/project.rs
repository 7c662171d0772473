use config_state::ConfigurationState;
use garment_types::categories;
use garment_types::{
    CategoryId, CategoryKind, LiningType, MaterialAssignment, MonogramPosition, PartId, RgbHex,
    ValueId,
};
use option_catalog::OptionCatalog;
use tracing::{instrument, trace};

use crate::buttons::{expand_layout, MAX_BUTTON_PARTS};
use crate::directives::{ButtonMaterial, MonogramDirective, Projection, RenderDirectives};

/// The material region every garment has: the primary fabric.
pub const FABRIC_PRIMARY_PART: &str = "fabric_primary";

/// The lining material region and visibility part.
pub const LINING_PART: &str = "lining";

/// Project a configuration into render directives.
///
/// Pure and total: the same state always yields identical directives,
/// and the empty state yields the fully-defined default garment (all
/// default parts visible, primary fabric neutral, two-button front).
///
/// Color precedence is explicit:
/// 1. the primary fabric category seeds `fabric_primary`;
/// 2. a Color/Texture category with a declared region overrides that
///    region only when its selection is non-default — a category left at
///    its inheriting default contributes nothing;
/// 3. overrides apply in category-id order, so the outcome never depends
///    on selection order;
/// 4. button hardware writes only the `button_material` namespace.
#[instrument(skip_all)]
pub fn project(state: &ConfigurationState, catalog: &OptionCatalog) -> Projection {
    let mut out = RenderDirectives::default();
    let mut warnings = Vec::new();

    project_materials(state, catalog, &mut out);
    project_families(state, catalog, &mut out);
    project_render_effects(state, catalog, &mut out, &mut warnings);
    project_lining(state, catalog, &mut out);
    project_buttons(state, catalog, &mut out, &mut warnings);
    project_monogram(state, catalog, &mut out);

    trace!(
        visible = out.visible_parts().count(),
        materials = out.part_material.len(),
        warnings = warnings.len(),
        "projection complete"
    );

    Projection {
        directives: out,
        warnings,
    }
}

/// Seed the primary fabric assignment, then apply per-region overrides.
fn project_materials(
    state: &ConfigurationState,
    catalog: &OptionCatalog,
    out: &mut RenderDirectives,
) {
    let fabric_primary = PartId::new(FABRIC_PRIMARY_PART);
    let fabric_category = CategoryId::new(categories::FABRIC);

    let mut primary = MaterialAssignment::fabric(RgbHex::neutral());
    if let Some(selection) = state.selection(&fabric_category) {
        if let Some(visual) = &selection.visual {
            if let Some(color) = &visual.color {
                primary.color = color.clone();
            }
            if let Some(params) = visual.material {
                primary.params = params;
            }
        }
    }
    out.part_visibility.insert(fabric_primary.clone(), true);
    out.part_material.insert(fabric_primary, primary);

    // Region overrides. catalog.categories() iterates in category-id
    // order, which fixes override precedence independent of the order
    // the user clicked through the configurator.
    for def in catalog.categories() {
        if def.id == fabric_category {
            continue;
        }
        let Some(region) = &def.region else {
            continue;
        };
        let Some(selection) = state.selection(&def.id) else {
            continue;
        };
        if selection.is_default || selection.is_none {
            // Inherits from the primary fabric; contributes nothing.
            continue;
        }
        let Some(visual) = &selection.visual else {
            continue;
        };

        let entry = out
            .part_material
            .entry(region.clone())
            .or_insert_with(|| MaterialAssignment::fabric(RgbHex::neutral()));
        if let Some(color) = &visual.color {
            entry.color = color.clone();
        }
        if let Some(params) = visual.material {
            entry.params = params;
        }
    }
}

/// Mutually exclusive part-family visibility for Component categories.
///
/// Selecting a value shows its part and hides every sibling; a "none"
/// value hides the whole family; no selection shows the catalog default.
fn project_families(
    state: &ConfigurationState,
    catalog: &OptionCatalog,
    out: &mut RenderDirectives,
) {
    let button_layout = CategoryId::new(categories::BUTTON_LAYOUT);

    for def in catalog.categories() {
        if def.kind != CategoryKind::Component {
            continue;
        }

        let default = || def.default_value().filter(|v| !v.is_none).map(|v| v.id.clone());

        // The button-layout axis lives in the button sub-state rather
        // than the selection map; everything else reads its selection.
        let visible: Option<ValueId> = if def.id == button_layout {
            match &state.buttons.layout_id {
                Some(id) => Some(id.clone()),
                None => default(),
            }
        } else {
            match state.selection(&def.id) {
                Some(selection) if selection.is_none => None,
                Some(selection) => Some(selection.value_id.clone()),
                None => default(),
            }
        };

        for (value, part) in catalog.part_table().family(&def.id) {
            let on = visible.as_ref() == Some(value);
            out.part_visibility.insert(part.clone(), on);
        }
    }
}

/// Apply authored show/hide overrides carried by selected values.
///
/// Values are re-resolved tolerantly here: a selection snapshot can
/// outlive a catalog swap, and a stale id should degrade with a warning
/// rather than wedge the preview.
fn project_render_effects(
    state: &ConfigurationState,
    catalog: &OptionCatalog,
    out: &mut RenderDirectives,
    warnings: &mut Vec<String>,
) {
    for (category, selection) in &state.selections {
        let Some(value) = catalog.find_value(category, &selection.value_id) else {
            warnings.push(format!(
                "selection {} in category {} no longer exists in the catalog",
                selection.value_id, category
            ));
            continue;
        };
        let Some(effects) = &value.render_effects else {
            continue;
        };
        for part in &effects.show {
            out.part_visibility.insert(part.clone(), true);
        }
        for part in &effects.hide {
            out.part_visibility.insert(part.clone(), false);
        }
    }
}

/// Lining visibility and material region.
fn project_lining(state: &ConfigurationState, catalog: &OptionCatalog, out: &mut RenderDirectives) {
    let lining_part = PartId::new(LINING_PART);
    let visible = state.lining.lining_type != LiningType::None;
    out.part_visibility.insert(lining_part.clone(), visible);

    if !visible {
        out.part_material.remove(&lining_part);
        return;
    }

    let mut assignment = MaterialAssignment::fabric(RgbHex::neutral());
    if let Some(color_id) = &state.lining.color_id {
        let category = CategoryId::new(categories::LINING_COLOR);
        if let Some(visual) = catalog
            .find_value(&category, color_id)
            .and_then(|v| v.visual.as_ref())
        {
            if let Some(color) = &visual.color {
                assignment.color = color.clone();
            }
            if let Some(params) = visual.material {
                assignment.params = params;
            }
        }
    }
    out.part_material.insert(lining_part, assignment);
}

/// Button hardware: positions from the layout table, material into the
/// isolated `button_material` namespace.
fn project_buttons(
    state: &ConfigurationState,
    catalog: &OptionCatalog,
    out: &mut RenderDirectives,
    warnings: &mut Vec<String>,
) {
    let (positions, warning) = expand_layout(state.buttons.layout_id.as_ref());
    warnings.extend(warning);

    for index in 0..MAX_BUTTON_PARTS {
        let part = PartId::new(format!("button_{}", index + 1));
        out.part_visibility.insert(part, index < positions.len());
    }

    let mut material = ButtonMaterial::default();
    if let Some(color_id) = &state.buttons.color_id {
        let category = CategoryId::new(categories::BUTTON_COLOR);
        match catalog
            .find_value(&category, color_id)
            .and_then(|v| v.visual.as_ref())
            .and_then(|v| v.color.as_ref())
        {
            Some(color) => material.color = color.clone(),
            None => warnings.push(format!("button color {} has no catalog color", color_id)),
        }
    }
    if let Some(material_id) = &state.buttons.material_id {
        let category = CategoryId::new(categories::BUTTON_MATERIAL);
        match catalog
            .find_value(&category, material_id)
            .and_then(|v| v.visual.as_ref())
            .and_then(|v| v.material)
        {
            Some(params) => material.params = params,
            None => warnings.push(format!(
                "button material {} has no catalog parameters",
                material_id
            )),
        }
    }

    out.button_positions = positions;
    out.button_material = Some(material);
}

/// At most one monogram part is visible; position gates visibility,
/// not text presence.
fn project_monogram(
    state: &ConfigurationState,
    catalog: &OptionCatalog,
    out: &mut RenderDirectives,
) {
    let category = CategoryId::new(categories::MONOGRAM_POSITION);

    // Hide every authored monogram part first.
    let family: Vec<(ValueId, PartId)> = catalog
        .part_table()
        .family(&category)
        .map(|(v, p)| (v.clone(), p.clone()))
        .collect();
    for (_, part) in &family {
        out.part_visibility.insert(part.clone(), false);
    }

    let mg = &state.monogram;
    if !mg.enabled {
        return;
    }
    let MonogramPosition::Position { id } = &mg.position else {
        return;
    };

    let part = family
        .iter()
        .find(|(value, _)| value == id)
        .map(|(_, part)| part.clone())
        .unwrap_or_else(|| PartId::new(format!("monogram_{}", id)));

    out.part_visibility.insert(part.clone(), true);
    out.monogram = Some(MonogramDirective {
        part,
        text: mg.text.clone(),
        font_id: mg.font_id.clone(),
        thread_color: mg.thread_color.clone(),
    });
}
