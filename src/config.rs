use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub classes: UnitClasses,
}

/// Weights of the composite heuristic. Defaults are the tuned values;
/// every knob is overridable from the CLI.
#[derive(Args, Debug, Clone)]
pub struct ScoringWeights {
    // === COVERAGE ===
    #[arg(long, default_value_t = 2.0)]
    pub bonus_new_coverage: f32,
    #[arg(long, default_value_t = 0.3)]
    pub penalty_overlap_coverage: f32,

    // === INTRINSIC VALUE ===
    #[arg(long, default_value_t = 0.7)]
    pub weight_tier: f32,
    #[arg(long, default_value_t = 1.0)]
    pub bonus_in_build: f32,

    // === CLASS CONSTRAINTS ===
    // One titan per build; a second one is effectively banned.
    #[arg(long, default_value_t = 999.0)]
    pub penalty_titan_duplicate: f32,

    // Stacking penalty for the Nth giant: 0/1/2/3+ already fielded.
    #[arg(long, default_value = "0,2,5,10")]
    pub giant_stack_penalties: String,

    // === ROUND CURVES ===
    // Titans are dead weight until the economy catches up.
    #[arg(long, default_value_t = 10.0)]
    pub penalty_titan_early: f32,
    #[arg(long, default_value_t = 7.0)]
    pub penalty_titan_round6: f32,
    #[arg(long, default_value_t = 6.0)]
    pub penalty_giant_early: f32,

    // Cost term divisors. Early rounds penalize expensive units,
    // round 4 onward the sign flips and cost scales the score up.
    #[arg(long, default_value_t = 400.0)]
    pub cost_divisor_early: f32,
    #[arg(long, default_value_t = 450.0)]
    pub cost_divisor_mid: f32,
    #[arg(long, default_value_t = 600.0)]
    pub cost_divisor_late_base: f32,
    #[arg(long, default_value_t = 50.0)]
    pub cost_divisor_late_step: f32,

    // === THREAT RESPONSE ===
    #[arg(long, default_value_t = 8.0)]
    pub penalty_enemy_counter: f32,
    #[arg(long, default_value_t = 10.0)]
    pub bonus_struggle_priority: f32,

    // === OPENERS ===
    #[arg(long, default_value_t = 13.0)]
    pub bonus_chaff_opener: f32,
    #[arg(long, default_value_t = 3.0)]
    pub penalty_chaff_late: f32,
    #[arg(long, default_value_t = 9.0)]
    pub bonus_clear_opener: f32,
    #[arg(long, default_value_t = 15.0)]
    pub bonus_clear_vs_chaff: f32,

    // === METADATA DEFAULTS ===
    #[arg(long, default_value_t = 300)]
    pub default_cost: u32,
    #[arg(long, default_value_t = 0)]
    pub default_unlock_cost: u32,
}

/// Designated unit classes the heuristic special-cases.
#[derive(Args, Debug, Clone)]
pub struct UnitClasses {
    /// Cheap disposable early-game units, comma separated.
    #[arg(long, default_value = "Crawler,Fang")]
    pub chaff_units: String,

    /// The cheap anti-chaff clearing unit pushed in round 1.
    #[arg(long, default_value = "Arclight")]
    pub clear_unit: String,
}

impl ScoringWeights {
    /// Penalties for adding one more giant on top of 0/1/2/3+ fielded.
    pub fn get_giant_stack_penalties(&self) -> [f32; 4] {
        parse_f32_array::<4>(&self.giant_stack_penalties, "giant_stack_penalties")
    }
}

impl UnitClasses {
    pub fn get_chaff_units(&self) -> Vec<String> {
        self.chaff_units
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    pub fn is_chaff(&self, name: &str) -> bool {
        self.chaff_units
            .split(',')
            .any(|s| s.trim().eq_ignore_ascii_case(name))
    }

    pub fn is_clear_unit(&self, name: &str) -> bool {
        self.clear_unit.trim().eq_ignore_ascii_case(name)
    }
}

// clap only materializes defaults through the parser, so the library
// mirrors them by hand for non-CLI construction.
impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            bonus_new_coverage: 2.0,
            penalty_overlap_coverage: 0.3,
            weight_tier: 0.7,
            bonus_in_build: 1.0,
            penalty_titan_duplicate: 999.0,
            giant_stack_penalties: "0,2,5,10".to_string(),
            penalty_titan_early: 10.0,
            penalty_titan_round6: 7.0,
            penalty_giant_early: 6.0,
            cost_divisor_early: 400.0,
            cost_divisor_mid: 450.0,
            cost_divisor_late_base: 600.0,
            cost_divisor_late_step: 50.0,
            penalty_enemy_counter: 8.0,
            bonus_struggle_priority: 10.0,
            bonus_chaff_opener: 13.0,
            penalty_chaff_late: 3.0,
            bonus_clear_opener: 9.0,
            bonus_clear_vs_chaff: 15.0,
            default_cost: 300,
            default_unlock_cost: 0,
        }
    }
}

impl Default for UnitClasses {
    fn default() -> Self {
        Self {
            chaff_units: "Crawler,Fang".to_string(),
            clear_unit: "Arclight".to_string(),
        }
    }
}

fn parse_f32_array<const N: usize>(s: &str, name: &str) -> [f32; N] {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != N {
        panic!("--{} requires {} values", name, N);
    }
    let mut arr = [0.0; N];
    for (i, p) in parts.iter().enumerate() {
        arr[i] = p
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("Invalid number in {}", name));
    }
    arr
}
