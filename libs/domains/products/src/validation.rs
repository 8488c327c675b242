//! Request validation rule sets for the products API.
//!
//! Each endpoint declares its rules once; rules run in order and accumulate
//! every violation, so clients get the full list in a single 400 response.
//! Messages are part of the public API contract and must not change.

use serde_json::Value;

use axum_helpers::validation::{Rule, checks, run_rules};

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, UpdateProduct};

const ID_RULES: [Rule; 1] = [Rule::param("id", "ID no valido", checks::int_string)];

// Price carries three independent rules: a non-numeric value fails both the
// numeric and the greater-than-zero checks, producing two entries.
const CREATE_RULES: [Rule; 4] = [
    Rule::body(
        "name",
        "El nombre del producto no puede ir vacio",
        checks::non_empty_string,
    ),
    Rule::body("price", "El precio tiene que ser un numero", checks::numeric),
    Rule::body(
        "price",
        "El precio del producto no puede ir vacio",
        checks::present,
    ),
    Rule::body("price", "Precio no valido", checks::positive_number),
];

const UPDATE_RULES: [Rule; 6] = [
    ID_RULES[0],
    CREATE_RULES[0],
    CREATE_RULES[1],
    CREATE_RULES[2],
    CREATE_RULES[3],
    Rule::body(
        "availability",
        "Valor para disponibilidad no válido",
        checks::boolean,
    ),
];

/// Validate and parse a product id path parameter.
pub fn product_id(raw: &str) -> ProductResult<i32> {
    let violations = run_rules(&ID_RULES, &[("id", raw)], &Value::Null);
    if !violations.is_empty() {
        return Err(ProductError::Validation(violations));
    }

    // int_string guarantees the parse succeeds
    raw.parse()
        .map_err(|e| ProductError::Internal(format!("id passed validation but failed to parse: {e}")))
}

/// Validate a create request body and parse it into a [`CreateProduct`].
pub fn create_product(body: &Value) -> ProductResult<CreateProduct> {
    let violations = run_rules(&CREATE_RULES, &[], body);
    if !violations.is_empty() {
        return Err(ProductError::Validation(violations));
    }

    Ok(serde_json::from_value(body.clone())?)
}

/// Validate a full-replace request and parse both the id and the body.
///
/// Path and body rules run as one set so the response carries every
/// violation from both locations.
pub fn update_product(raw_id: &str, body: &Value) -> ProductResult<(i32, UpdateProduct)> {
    let violations = run_rules(&UPDATE_RULES, &[("id", raw_id)], body);
    if !violations.is_empty() {
        return Err(ProductError::Validation(violations));
    }

    let id = raw_id
        .parse()
        .map_err(|e| ProductError::Internal(format!("id passed validation but failed to parse: {e}")))?;
    let input = serde_json::from_value(body.clone())?;

    Ok((id, input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn violations(err: ProductError) -> Vec<axum_helpers::validation::Violation> {
        match err {
            ProductError::Validation(v) => v,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_create_body_parses() {
        let input = create_product(&json!({"name": "Mouse", "price": 140})).unwrap();
        assert_eq!(input.name, "Mouse");
        assert_eq!(input.price, 140.0);
    }

    #[test]
    fn test_empty_create_body_reports_four_violations() {
        let errs = violations(create_product(&Value::Null).unwrap_err());
        assert_eq!(errs.len(), 4);
        assert_eq!(errs[0].msg, "El nombre del producto no puede ir vacio");
        assert_eq!(errs[1].msg, "El precio tiene que ser un numero");
        assert_eq!(errs[2].msg, "El precio del producto no puede ir vacio");
        assert_eq!(errs[3].msg, "Precio no valido");
    }

    #[test]
    fn test_zero_price_reports_single_violation() {
        let errs = violations(create_product(&json!({"name": "Mouse", "price": 0})).unwrap_err());
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].msg, "Precio no valido");
    }

    #[test]
    fn test_negative_price_reports_single_violation() {
        let errs =
            violations(create_product(&json!({"name": "Mouse", "price": -100})).unwrap_err());
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].msg, "Precio no valido");
    }

    #[test]
    fn test_string_price_reports_two_violations() {
        let errs =
            violations(create_product(&json!({"name": "Mouse", "price": "Hola"})).unwrap_err());
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[0].msg, "El precio tiene que ser un numero");
        assert_eq!(errs[1].msg, "Precio no valido");
    }

    #[test]
    fn test_product_id_accepts_integers() {
        assert_eq!(product_id("42").unwrap(), 42);
    }

    #[test]
    fn test_product_id_rejects_non_integers() {
        for raw in ["hola", "1.5", ""] {
            let errs = violations(product_id(raw).unwrap_err());
            assert_eq!(errs.len(), 1);
            assert_eq!(errs[0].msg, "ID no valido");
            assert_eq!(errs[0].location, "params");
        }
    }

    #[test]
    fn test_product_id_beyond_i32_range_is_invalid() {
        // Ids are serial i32 columns, so an id that cannot exist is rejected
        // up front rather than reaching the lookup and producing a 404.
        let errs = violations(product_id("99999999999").unwrap_err());
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].msg, "ID no valido");
    }

    #[test]
    fn test_update_with_empty_body_reports_five_violations() {
        let errs = violations(update_product("1", &Value::Null).unwrap_err());
        assert_eq!(errs.len(), 5);
        assert_eq!(errs[4].msg, "Valor para disponibilidad no válido");
    }

    #[test]
    fn test_update_accumulates_id_and_body_violations() {
        let errs = violations(update_product("hola", &Value::Null).unwrap_err());
        assert_eq!(errs.len(), 6);
        assert_eq!(errs[0].msg, "ID no valido");
        assert_eq!(errs[0].location, "params");
        assert_eq!(errs[1].location, "body");
    }

    #[test]
    fn test_valid_update_parses() {
        let (id, input) = update_product(
            "7",
            &json!({"name": "Monitor", "price": 300, "availability": false}),
        )
        .unwrap();
        assert_eq!(id, 7);
        assert_eq!(input.name, "Monitor");
        assert!(!input.availability);
    }

    #[test]
    fn test_whitespace_name_is_rejected() {
        let errs = violations(create_product(&json!({"name": "   ", "price": 10})).unwrap_err());
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].msg, "El nombre del producto no puede ir vacio");
    }
}
