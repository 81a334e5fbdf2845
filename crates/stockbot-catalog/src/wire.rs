//! JSON shape returned by the storefront catalog endpoint.
//!
//! The endpoint is loose about types (quantities and prices arrive either as
//! numbers or numeric strings), so scalar fields decode leniently. A payload
//! that is not an object, or whose `producto` is not an array, is rejected.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use stockbot_core::error::{Error, Result};
use stockbot_core::types::CatalogItem;

#[derive(Debug, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub producto: Option<Vec<RawProduct>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawProduct {
    #[serde(deserialize_with = "lenient_string")]
    pub producto: String,
    #[serde(rename = "codigoInterno", deserialize_with = "lenient_string")]
    pub codigo_interno: String,
    #[serde(deserialize_with = "lenient_quantity")]
    pub disponible: u32,
    #[serde(rename = "precioUSD", deserialize_with = "lenient_price")]
    pub precio_usd: f64,
    #[serde(rename = "precioARS", deserialize_with = "lenient_price")]
    pub precio_ars: f64,
    #[serde(deserialize_with = "lenient_string")]
    pub marca: String,
    #[serde(deserialize_with = "lenient_string")]
    pub categoria: String,
    #[serde(deserialize_with = "lenient_string")]
    pub descripcion: String,
    pub imagenes: Value,
}

impl From<RawProduct> for CatalogItem {
    fn from(raw: RawProduct) -> Self {
        let image = match raw.imagenes {
            Value::Array(list) => list.into_iter().find_map(image_url),
            other => image_url(other),
        };
        Self {
            name: raw.producto,
            code: raw.codigo_interno,
            stock_quantity: raw.disponible,
            price_usd: raw.precio_usd,
            price_ars: raw.precio_ars,
            brand: raw.marca,
            category: raw.categoria,
            description: Some(raw.descripcion).filter(|d| !d.trim().is_empty()),
            image,
        }
    }
}

fn image_url(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Object(map) => map.get("url").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

/// Decode a response body into catalog items.
pub fn decode(body: &str) -> Result<Vec<CatalogItem>> {
    let response: CatalogResponse = serde_json::from_str(body).map_err(|e| Error::Decode(e.to_string()))?;
    Ok(response.producto.unwrap_or_default().into_iter().map(CatalogItem::from).collect())
}

fn lenient_string<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<String, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn lenient_quantity<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<u32, D::Error> {
    let n = number_of(&Value::deserialize(de)?).unwrap_or(0.0);
    Ok(if n.is_finite() && n > 0.0 { n.trunc().min(f64::from(u32::MAX)) as u32 } else { 0 })
}

fn lenient_price<'de, D: Deserializer<'de>>(de: D) -> std::result::Result<f64, D::Error> {
    let n = number_of(&Value::deserialize(de)?).unwrap_or(0.0);
    Ok(if n.is_finite() && n > 0.0 { n } else { 0.0 })
}
