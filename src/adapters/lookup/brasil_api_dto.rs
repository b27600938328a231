//! BrasilAPI CNPJ response body.
//!
//! Only the fields the registration form uses. The registry returns `null`
//! for many of them and numbers for some, so every field is read leniently
//! into a string, with absent values becoming empty.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::company::{digits_only, mask_mobile_phone, Cnpj, CompanyProfile};

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct BrasilApiCompany {
    #[serde(default, deserialize_with = "lenient_string")]
    pub cnpj: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub razao_social: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub nome_fantasia: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cep: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub logradouro: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub numero: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub bairro: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub municipio: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub uf: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ddd_telefone_1: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub telefone_1: String,
}

impl BrasilApiCompany {
    /// Converts to a profile, falling back to the requested CNPJ when the
    /// body does not carry a usable one.
    pub fn into_profile(self, requested: &Cnpj) -> CompanyProfile {
        let phone = self.phone();
        let cnpj = Cnpj::parse(&self.cnpj).unwrap_or_else(|_| requested.clone());
        let trade_name = if self.nome_fantasia.trim().is_empty() {
            self.razao_social.clone()
        } else {
            self.nome_fantasia
        };

        CompanyProfile {
            cnpj,
            legal_name: self.razao_social,
            trade_name,
            postal_code: self.cep,
            street: self.logradouro,
            number: self.numero,
            district: self.bairro,
            municipality: self.municipio,
            state: self.uf,
            email: self.email,
            phone,
        }
    }

    /// `ddd_telefone_1` usually already holds DDD and number together; older
    /// payloads split them across `ddd_telefone_1` and `telefone_1`.
    fn phone(&self) -> String {
        let ddd = digits_only(&self.ddd_telefone_1);
        if ddd.is_empty() {
            return String::new();
        }
        if ddd.len() >= 10 {
            return mask_mobile_phone(&ddd);
        }
        mask_mobile_phone(&format!("{}{}", ddd, digits_only(&self.telefone_1)))
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn requested() -> Cnpj {
        Cnpj::parse("11222333000181").unwrap()
    }

    #[test]
    fn full_payload_maps_to_profile() {
        let body = json!({
            "cnpj": "11222333000181",
            "razao_social": "ACME LTDA",
            "nome_fantasia": "ACME",
            "cep": "59000000",
            "logradouro": "RUA DAS FLORES",
            "numero": "10",
            "bairro": "CENTRO",
            "municipio": "NATAL",
            "uf": "RN",
            "email": "contato@acme.com.br",
            "ddd_telefone_1": "84912345678",
            "situacao_cadastral": 2
        });

        let company: BrasilApiCompany = serde_json::from_value(body).unwrap();
        let profile = company.into_profile(&requested());

        assert_eq!(profile.legal_name, "ACME LTDA");
        assert_eq!(profile.trade_name, "ACME");
        assert_eq!(profile.municipality, "NATAL");
        assert_eq!(profile.phone, "(84) 91234-5678");
    }

    #[test]
    fn nulls_and_numbers_are_tolerated() {
        let body = json!({
            "cnpj": "11222333000181",
            "razao_social": "ACME LTDA",
            "nome_fantasia": null,
            "cep": 59000000,
            "numero": null,
            "email": null
        });

        let company: BrasilApiCompany = serde_json::from_value(body).unwrap();
        let profile = company.into_profile(&requested());

        assert_eq!(profile.trade_name, "ACME LTDA");
        assert_eq!(profile.postal_code, "59000000");
        assert_eq!(profile.number, "");
        assert_eq!(profile.email, "");
        assert_eq!(profile.phone, "");
    }

    #[test]
    fn split_ddd_and_number_are_joined() {
        let company = BrasilApiCompany {
            ddd_telefone_1: "84".to_string(),
            telefone_1: "91234-5678".to_string(),
            ..Default::default()
        };
        assert_eq!(company.phone(), "(84) 91234-5678");
    }

    #[test]
    fn missing_cnpj_falls_back_to_requested() {
        let company: BrasilApiCompany =
            serde_json::from_value(json!({ "razao_social": "ACME LTDA" })).unwrap();
        assert_eq!(company.into_profile(&requested()).cnpj, requested());
    }
}
