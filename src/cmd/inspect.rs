use crate::reports;
use clap::Args;
use mechforge::config::Config;
use mechforge::scorer::Scorer;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub config: Config,

    /// Unit names to inspect. With none given, lists all known units.
    pub units: Vec<String>,
}

pub fn run(args: &InspectArgs, scorer: &Scorer) {
    if args.units.is_empty() {
        println!("\nKnown units:");
        for name in scorer.kb.unit_names() {
            let tag = scorer.kb.tier_of(&name).tag();
            if tag.is_empty() {
                println!("  {}", name);
            } else {
                println!("  {} [{}]", name, tag);
            }
        }
        return;
    }

    for name in &args.units {
        match scorer.kb.lookup(name) {
            Some(unit) => reports::print_unit_card(unit),
            None => println!("\n❓ Unknown unit: {}", name),
        }
    }
}
