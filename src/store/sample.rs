//! Built-in seed: hurricane Michael, accident year 2018, eight programs

use crate::event::Event;
use crate::program::{Program, ProgramTable};

/// The seed event
pub fn sample_event() -> Event {
    Event::new(1, "Michael", 2018, 2018, 1000.0, "ARL")
}

/// Figures in grid order, from FX through Change Net of RP
type Figures = [f64; 16];

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u32,
    cedant: &str,
    program_number: &str,
    facility: &str,
    lob: &str,
    underwriter: &str,
    program_type: &str,
    figures: Figures,
) -> Program {
    let [fx, exposed, rep_fgu, rep_unl, selected_unl, layer_loss, arch_loss, arch_usd_gross, arch_usd_ceded_to_us, arch_usd_net, arch_usd_net_rp, arch_usd_net_of_rp, booked_prior_gross, booked_prior_net_of_rp, change_gross, change_net_of_rp] =
        figures;

    Program {
        id,
        cedant: cedant.to_string(),
        program_number: program_number.to_string(),
        description: String::new(),
        facility: facility.to_string(),
        lob: lob.to_string(),
        company: "101".to_string(),
        underwriter: underwriter.to_string(),
        program_type: program_type.to_string(),
        currency: "USD".to_string(),
        fx: Some(fx),
        exposed: Some(exposed),
        rep_fgu: Some(rep_fgu),
        rep_unl: Some(rep_unl),
        selected_unl: Some(selected_unl),
        layer_loss: Some(layer_loss),
        arch_loss: Some(arch_loss),
        arch_usd_gross: Some(arch_usd_gross),
        arch_usd_ceded_to_us: Some(arch_usd_ceded_to_us),
        arch_usd_net: Some(arch_usd_net),
        arch_usd_net_rp: Some(arch_usd_net_rp),
        arch_usd_net_of_rp: Some(arch_usd_net_of_rp),
        booked_prior_gross: Some(booked_prior_gross),
        booked_prior_net_of_rp: Some(booked_prior_net_of_rp),
        change_gross: Some(change_gross),
        change_net_of_rp: Some(change_net_of_rp),
    }
}

/// The seed programs for `sample_event`
pub fn sample_programs() -> ProgramTable {
    let programs = vec![
        seed(1, "American Family Insurance G", "417540", "9PC", "1PC", "JLeg", "XS",
            [1.0, 1.0, 0.0, 0.0, 24261.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        seed(2, "St Johns Insurance", "420850", "9PC", "1PC", "JLeg", "XS",
            [1.0, 1.0, 135936.0, 195000.0, 234000.0, 100000.0, 4000.0, 4000.0, 1903.0, 2097.0, 0.0, 2097.0, 4000.0, 4000.0, 0.0, -1903.0]),
        seed(3, "Southern Oak Insurance", "421660", "9PC", "1PC", "MMel", "XS",
            [1.0, 1.0, 29930.0, 33400.0, 39270.0, 34270.0, 1714.0, 1714.0, 815.0, 899.0, 256.0, 642.0, 1710.0, 1251.0, -4.0, -603.0]),
        seed(4, "Liberty Mutual Insurance", "422580", "9PC", "1PC", "MMel", "XS",
            [1.0, 1.0, 0.0, 0.0, 92679.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        seed(5, "Travelers", "422830", "9PP", "2CO", "JLeg", "QS",
            [1.0, 1.0, 5537.0, 5537.0, 24000.0, 24000.0, 1560.0, 1560.0, 125.0, 1435.0, 0.0, 1435.0, 1560.0, 1560.0, 0.0, -125.0]),
        seed(6, "Olympus Insurance Co", "424920", "9PC", "1PC", "MMel", "XS",
            [1.0, 1.0, 73844.0, 71454.0, 138000.0, 47111.0, 8467.0, 8467.0, 4028.0, 4439.0, 0.0, 4439.0, 8490.0, 8490.0, 23.0, -4051.0]),
        seed(7, "Universal Property Casualty", "425680", "9PC", "1PC", "MMel", "XS",
            [1.0, 1.0, 78719.0, 350000.0, 375000.0, 364000.0, 6010.0, 6010.0, 2859.0, 3151.0, 871.0, 2279.0, 6015.0, 4331.0, 5.0, -2072.0]),
        seed(8, "USAA Group", "425850", "9SL", "1SL", "JLeg", "XS",
            [1.0, 1.0, 1038300.0, 2390000.0, 4399000.0, 291933.0, 854.0, 854.0, 218.0, 636.0, 0.0, 636.0, 854.0, 854.0, 0.0, -218.0]),
    ];

    ProgramTable::new(programs).expect("sample program ids are distinct")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::load_programs;

    #[test]
    fn test_sample_programs() {
        let programs = sample_programs();
        assert_eq!(programs.ids(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(programs.get(2).unwrap().selected_unl, Some(234_000.0));
        assert_eq!(programs.get(5).unwrap().program_type, "QS");
    }

    #[test]
    fn test_sample_matches_shipped_csv() {
        let by_event = load_programs("data/programs.csv").expect("Failed to load programs");
        assert_eq!(by_event[&sample_event().id], sample_programs());
    }
}
