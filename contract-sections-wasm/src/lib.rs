use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

use contract_sections::{
    merge_exhibits, BlueprintRegistry, ContractType, OrderedSection, OrderingReport,
    SectionDraft, SectionOrderer,
};

// ============================================================================
// ORDERING API
// ============================================================================

/// Result of ordering sections, shaped for the contract and template forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResult {
    /// False when the input could not be read
    pub ok: bool,
    /// Sections in canonical order, with `order` assigned
    pub sections: Vec<OrderedSection>,
    /// Matched/unmatched/renamed/missing summary
    pub report: Option<OrderingReport>,
    /// Why the input was rejected
    pub error: Option<String>,
}

impl OrderResult {
    fn failed(message: String) -> Self {
        Self {
            ok: false,
            sections: Vec::new(),
            report: None,
            error: Some(message),
        }
    }
}

/// Order sections for a contract type.
///
/// `sections` and `exhibits` are arrays of `{ title, body }`; `exhibits` may
/// be `null` or `undefined`. `contract_type` is a wire key such as
/// `"GOLF_OUTING"`.
#[wasm_bindgen]
pub fn order_sections(sections: JsValue, contract_type: &str, exhibits: JsValue) -> JsValue {
    init();
    let result = match read_input(sections, exhibits) {
        Ok((sections, exhibits)) => order_sections_internal(sections, contract_type, exhibits),
        Err(message) => OrderResult::failed(message),
    };
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn read_input(
    sections: JsValue,
    exhibits: JsValue,
) -> Result<(Vec<SectionDraft>, Option<Vec<SectionDraft>>), String> {
    let sections: Vec<SectionDraft> =
        serde_wasm_bindgen::from_value(sections).map_err(|e| format!("invalid sections: {}", e))?;
    let exhibits = if exhibits.is_null() || exhibits.is_undefined() {
        None
    } else {
        Some(
            serde_wasm_bindgen::from_value(exhibits)
                .map_err(|e| format!("invalid exhibits: {}", e))?,
        )
    };
    Ok((sections, exhibits))
}

/// Order a raw generator payload (a JSON array of sections), returning the
/// result as a JSON string.
#[wasm_bindgen]
pub fn order_sections_json(sections_json: &str, contract_type: &str) -> String {
    init();
    let result = match SectionDraft::list_from_json(sections_json) {
        Ok(sections) => order_sections_internal(sections, contract_type, None),
        Err(e) => OrderResult::failed(e.to_string()),
    };
    serde_json::to_string(&result).unwrap_or_else(|_| "null".to_string())
}

fn order_sections_internal(
    sections: Vec<SectionDraft>,
    contract_type: &str,
    exhibits: Option<Vec<SectionDraft>>,
) -> OrderResult {
    let contract_type: ContractType = match contract_type.parse() {
        Ok(ct) => ct,
        Err(e) => return OrderResult::failed(format!("{}", e)),
    };

    let merged = merge_exhibits(sections, exhibits.as_deref());
    let outcome =
        SectionOrderer::new(BlueprintRegistry::shared()).order_with_report(merged, contract_type);

    OrderResult {
        ok: true,
        sections: outcome.sections,
        report: Some(outcome.report),
        error: None,
    }
}

// ============================================================================
// BLUEPRINT API
// ============================================================================

/// Blueprint metadata for rendering contract-type pickers and outlines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlueprintInfo {
    /// Wire key, e.g. "GOLF_OUTING"
    pub contract_type: String,
    pub label: String,
    pub sections: Vec<String>,
    pub guidance: String,
}

/// All blueprints, in contract-type order.
#[wasm_bindgen]
pub fn list_blueprints() -> JsValue {
    init();
    serde_wasm_bindgen::to_value(&list_blueprints_internal()).unwrap_or(JsValue::NULL)
}

fn list_blueprints_internal() -> Vec<BlueprintInfo> {
    BlueprintRegistry::shared()
        .iter()
        .map(|blueprint| BlueprintInfo {
            contract_type: blueprint.contract_type.as_key().to_string(),
            label: blueprint.contract_type.label().to_string(),
            sections: blueprint.sections.clone(),
            guidance: blueprint.guidance.clone(),
        })
        .collect()
}
