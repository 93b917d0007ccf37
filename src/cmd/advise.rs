use crate::cmd::parse_unit_list;
use crate::reports;
use clap::Args;
use mechforge::config::Config;
use mechforge::roster::Roster;
use mechforge::scorer::{boards, Scorer};

#[derive(Args, Debug, Clone)]
pub struct AdviseArgs {
    #[command(flatten)]
    pub config: Config,

    /// My fielded units, comma separated.
    #[arg(short, long, default_value = "")]
    pub mine: String,

    /// Observed enemy units, comma separated.
    #[arg(short, long, default_value = "")]
    pub enemy: String,

    /// Enemy units I struggle against (subset of --enemy).
    #[arg(short, long, default_value = "")]
    pub struggle: String,

    /// Current game round.
    #[arg(short, long, default_value_t = 1)]
    pub round: u32,

    /// How many ranked recommendations to surface.
    #[arg(short, long, default_value_t = 2)]
    pub top: usize,
}

pub fn run(args: &AdviseArgs, scorer: &Scorer) {
    let roster = Roster::new(
        parse_unit_list(&args.mine),
        parse_unit_list(&args.enemy),
        parse_unit_list(&args.struggle),
        args.round,
    );

    if roster.is_empty() {
        println!("\nSelect units with --mine and --enemy to get advice.");
        return;
    }

    println!(
        "\n⚔️  Round {} | mine: {} | enemy: {}",
        roster.round,
        roster.my_units.len(),
        roster.enemy_units.len()
    );

    if !roster.enemy_units.is_empty() {
        reports::print_board(
            "Suggested counters (tier-weighted)",
            &boards::counter_board(&scorer.kb, &roster),
            &scorer.kb,
        );
    }
    if !roster.my_units.is_empty() {
        reports::print_board(
            "Vulnerabilities in my build",
            &boards::vulnerability_board(&scorer.kb, &roster),
            &scorer.kb,
        );
    }

    if !roster.my_units.is_empty() && !roster.enemy_units.is_empty() {
        reports::print_unit_list("🔒 Safe upgrades", &boards::safe_upgrades(&scorer.kb, &roster));
        reports::print_unit_list("🚀 Free punish picks", &boards::punish_picks(&scorer.kb, &roster));
        reports::print_avoid_list(&boards::avoid_list(&scorer.kb, &roster));
    }

    let ranked = scorer.rank(&roster);
    reports::print_ranking(&ranked, args.top, &scorer.kb);
    reports::print_recommendations(&ranked, args.top);

    if let Some(staple) = scorer.chaff_advisory(&roster) {
        reports::print_chaff_advisory(&staple);
    }
}
