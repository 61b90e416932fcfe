use crate::effects::blinds::BlindsParams;
use crate::effects::crossfade::CrossfadeParams;
use crate::effects::curtain::CurtainParams;
use crate::effects::explode::ExplodeParams;
use crate::effects::marquee::MarqueeParams;
use crate::effects::pixelate::PixelateParams;
use crate::effects::roll::RollParams;
use crate::effects::stripe::StripeParams;
use crate::effects::wipe::WipeParams;
use crate::effects::{Effect, Endpoints, FrameStream};
use crate::foundation::error::{MatrixFxError, MatrixFxResult};
use crate::foundation::random::RandomSource;

/// A configured transition, as written in show files and `--params`.
///
/// Serialized with an inline `"kind"` tag next to the effect's own parameters; missing parameters
/// take their defaults. Deserialization accepts the same case-insensitive kinds and aliases as
/// [`parse_effect`] but leaves validation to the caller.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", try_from = "serde_json::Value")]
pub enum EffectSpec {
    Wipe(WipeParams),
    Blinds(BlindsParams),
    Explode(ExplodeParams),
    Pixelate(PixelateParams),
    Crossfade(CrossfadeParams),
    Curtain(CurtainParams),
    Marquee(MarqueeParams),
    Roll(RollParams),
    Stripe(StripeParams),
}

impl Default for EffectSpec {
    fn default() -> Self {
        Self::Wipe(WipeParams::default())
    }
}

impl EffectSpec {
    /// Every effect with default parameters.
    pub fn catalog() -> Vec<Self> {
        vec![
            Self::Wipe(WipeParams::default()),
            Self::Blinds(BlindsParams::default()),
            Self::Explode(ExplodeParams::default()),
            Self::Pixelate(PixelateParams::default()),
            Self::Crossfade(CrossfadeParams::default()),
            Self::Curtain(CurtainParams::default()),
            Self::Marquee(MarqueeParams::default()),
            Self::Roll(RollParams::default()),
            Self::Stripe(StripeParams::default()),
        ]
    }

    /// Parse `kind` plus a JSON parameter object. `params` may be `null` for all defaults.
    pub fn parse(kind: &str, params: &serde_json::Value) -> MatrixFxResult<Self> {
        let object = match params {
            serde_json::Value::Null => serde_json::Map::new(),
            serde_json::Value::Object(map) => map.clone(),
            _ => {
                return Err(MatrixFxError::validation(format!(
                    "{} params must be an object",
                    kind.trim()
                )));
            }
        };
        let spec = Self::from_parts(kind, object)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Build the variant named by `kind` from its parameter object, without validating it.
    fn from_parts(
        kind: &str,
        params: serde_json::Map<String, serde_json::Value>,
    ) -> MatrixFxResult<Self> {
        let kind = canonical_kind(kind)?;
        let params = serde_json::Value::Object(params);
        let spec = match kind {
            "wipe" => Self::Wipe(decode(kind, params)?),
            "blinds" => Self::Blinds(decode(kind, params)?),
            "explode" => Self::Explode(decode(kind, params)?),
            "pixelate" => Self::Pixelate(decode(kind, params)?),
            "crossfade" => Self::Crossfade(decode(kind, params)?),
            "curtain" => Self::Curtain(decode(kind, params)?),
            "marquee" => Self::Marquee(decode(kind, params)?),
            "roll" => Self::Roll(decode(kind, params)?),
            "stripe" => Self::Stripe(decode(kind, params)?),
            other => {
                return Err(MatrixFxError::validation(format!(
                    "unknown effect kind '{other}'"
                )));
            }
        };
        Ok(spec)
    }

    fn inner(&self) -> &dyn Effect {
        match self {
            Self::Wipe(p) => p,
            Self::Blinds(p) => p,
            Self::Explode(p) => p,
            Self::Pixelate(p) => p,
            Self::Crossfade(p) => p,
            Self::Curtain(p) => p,
            Self::Marquee(p) => p,
            Self::Roll(p) => p,
            Self::Stripe(p) => p,
        }
    }
}

impl Effect for EffectSpec {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn validate(&self) -> MatrixFxResult<()> {
        self.inner().validate()
    }

    fn frames<'r>(&self, endpoints: Endpoints, rng: &'r mut dyn RandomSource) -> FrameStream<'r> {
        self.inner().frames(endpoints, rng)
    }
}

impl TryFrom<serde_json::Value> for EffectSpec {
    type Error = MatrixFxError;

    fn try_from(value: serde_json::Value) -> MatrixFxResult<Self> {
        let serde_json::Value::Object(mut object) = value else {
            return Err(MatrixFxError::validation("effect must be an object"));
        };
        let kind = match object.remove("kind") {
            Some(serde_json::Value::String(kind)) => kind,
            _ => {
                return Err(MatrixFxError::validation(
                    "effect needs a string \"kind\" field",
                ));
            }
        };
        Self::from_parts(&kind, object)
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    kind: &str,
    params: serde_json::Value,
) -> MatrixFxResult<T> {
    serde_json::from_value(params).map_err(|e| MatrixFxError::serde(format!("{kind} params: {e}")))
}

/// Shorthand for [`EffectSpec::parse`].
pub fn parse_effect(kind: &str, params: &serde_json::Value) -> MatrixFxResult<EffectSpec> {
    EffectSpec::parse(kind, params)
}

fn canonical_kind(kind: &str) -> MatrixFxResult<&'static str> {
    let normalized = kind.trim().to_ascii_lowercase().replace('-', "_");
    if normalized.is_empty() {
        return Err(MatrixFxError::validation("effect kind must be non-empty"));
    }
    let canonical = match normalized.as_str() {
        "wipe" => "wipe",
        "blinds" | "venetian" | "venetian_blinds" => "blinds",
        "explode" | "implode" => "explode",
        "pixelate" | "dissolve" => "pixelate",
        "crossfade" | "fade" => "crossfade",
        "curtain" => "curtain",
        "marquee" | "scroll" => "marquee",
        "roll" => "roll",
        "stripe" => "stripe",
        _ => {
            return Err(MatrixFxError::validation(format!(
                "unknown effect kind '{normalized}'"
            )));
        }
    };
    Ok(canonical)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/spec.rs"]
mod tests;
