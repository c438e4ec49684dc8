use serde::{Deserialize, Serialize};

/// Tunables for the backdrop, provided by the host page.
/// Every field has a default matching the classic look, so a partial JSON
/// object (or none at all) is enough to embed the effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackdropConfig {
    /// Number of stars in the fixed twinkling population.
    pub star_count: usize,
    /// Alpha of the black overlay painted each frame instead of a clear;
    /// lower values leave longer trails.
    pub fade_alpha: f32,
    /// Per-frame probability of spawning a shooting star.
    pub spawn_chance: f32,
    /// Min/max trail length of a shooting star, in surface units.
    pub streak_length: (f32, f32),
    /// Min/max per-frame displacement of a shooting star.
    pub streak_speed: (f32, f32),
    /// Per-frame opacity loss of a shooting star.
    pub streak_decay: f32,
    /// Stroke width of a shooting star.
    pub streak_width: f32,
    /// Hard cap on simultaneously active shooting stars.
    pub max_streaks: usize,
    /// Minimum gap between two cursor-trail particles, in milliseconds.
    pub trail_interval_ms: f64,
    /// Lifetime of a cursor-trail particle, in milliseconds.
    pub trail_lifetime_ms: f64,
    /// Hard cap on simultaneously live cursor-trail particles.
    pub max_trail: usize,
    /// Glow halo diameter in CSS pixels.
    pub glow_size: f32,
    /// Glow halo diameter while over an interactive element.
    pub glow_size_hover: f32,
    /// Fixed RNG seed. None lets the host pick one (normally the wall
    /// clock); set it to make the whole animation reproducible.
    pub seed: Option<u64>,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            star_count: 200,
            fade_alpha: 0.1,
            spawn_chance: 0.005,
            streak_length: (40.0, 120.0),
            streak_speed: (2.0, 5.0),
            streak_decay: 0.005,
            streak_width: 2.0,
            max_streaks: 32,
            trail_interval_ms: 50.0,
            trail_lifetime_ms: 500.0,
            max_trail: 64,
            glow_size: 30.0,
            glow_size_hover: 60.0,
            seed: None,
        }
    }
}

impl BackdropConfig {
    /// Parse a config from a JSON string. Missing fields fall back to the
    /// defaults above.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_constants() {
        let c = BackdropConfig::default();
        assert_eq!(c.star_count, 200);
        assert_eq!(c.fade_alpha, 0.1);
        assert_eq!(c.spawn_chance, 0.005);
        assert_eq!(c.streak_decay, 0.005);
        assert_eq!(c.trail_interval_ms, 50.0);
        assert_eq!(c.trail_lifetime_ms, 500.0);
        assert_eq!(c.glow_size, 30.0);
        assert_eq!(c.glow_size_hover, 60.0);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let c = BackdropConfig::from_json(r#"{ "star_count": 50, "seed": 7 }"#).unwrap();
        assert_eq!(c.star_count, 50);
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.spawn_chance, 0.005);
        assert_eq!(c.streak_length, (40.0, 120.0));
    }

    #[test]
    fn empty_object_is_all_defaults() {
        let c = BackdropConfig::from_json("{}").unwrap();
        assert_eq!(c.star_count, BackdropConfig::default().star_count);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(BackdropConfig::from_json("{ star_count: }").is_err());
    }
}
