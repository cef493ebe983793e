//! Integration tests comparing the planner against an independent brute force.
//!
//! The brute force below walks the built-in three day event with explicit nested loops and the
//! raw option totals, rather than the planner's combination iterator:
//!
//! | option | items | cost |
//! |--------|-------|------|
//! | 0      | 0     | 0    |
//! | 1      | 2     | 132  |
//! | 2      | 8     | 802  |
//! | 3      | 18    | 2142 |
//! | 4      | 38    | 4922 |
//!
//! Mandatory purchases give 78 items for 4120, the unlimited pack is 45 items for 6780.
//!
//! For a target of 270 the shortfall after mandatory purchases is 192. The cheapest plan buys
//! options 1, 3 and 4 (58 items for 7196) and three unlimited packs (135 items for 20340):
//! 271 items for 31656 in total.

use testresult::TestResult;

use ladder::{
    Simulator,
    catalog::Catalog,
    plan::{Purchase, TopUp},
};

const OPTIONS: [(u64, u64); 5] = [(0, 0), (2, 132), (8, 802), (18, 2142), (38, 4922)];
const BASE: (u64, u64) = (78, 4120);
const PACK: (u64, u64) = (45, 6780);

/// Cheapest total cost over every combination of day options plus top-up.
fn brute_force_min_cost(target: u64) -> Option<u64> {
    let mut best: Option<u64> = None;

    for (i_items, i_cost) in OPTIONS {
        for (j_items, j_cost) in OPTIONS {
            for (k_items, k_cost) in OPTIONS {
                let mut items = BASE.0 + i_items + j_items + k_items;
                let mut cost = BASE.1 + i_cost + j_cost + k_cost;

                while items < target {
                    items += PACK.0;
                    cost += PACK.1;
                }

                if best.is_none_or(|best| cost < best) {
                    best = Some(cost);
                }
            }
        }
    }

    best
}

#[test]
fn brute_force_data_matches_reference_catalog() {
    let catalog = Catalog::reference();

    let options: Vec<(u64, u64)> = catalog
        .day_options()
        .iter()
        .map(|option| (option.items, option.cost))
        .collect();

    assert_eq!(catalog.days(), 3, "the brute force walks three days");
    assert_eq!(options, OPTIONS.to_vec(), "day options");
    assert_eq!((catalog.base_items(), catalog.base_cost()), BASE, "mandatory totals");
    assert_eq!(
        (catalog.unlimited().items, catalog.unlimited().cost),
        PACK,
        "unlimited pack"
    );
}

#[test]
fn planner_matches_brute_force_for_supported_targets() -> TestResult {
    brute_force_data_matches_reference_catalog();

    let simulator = Simulator::reference();

    for &target in simulator.targets().values() {
        let plan = simulator.plan(i64::try_from(target)?)?;

        assert_eq!(
            Some(plan.total_cost()),
            brute_force_min_cost(target),
            "target {target}"
        );
    }

    Ok(())
}

#[test]
fn supported_targets_are_feasible() -> TestResult {
    let simulator = Simulator::reference();

    for &target in simulator.targets().values() {
        let plan = simulator.plan(i64::try_from(target)?)?;

        assert!(plan.total_items() >= target, "target {target}");
        assert_eq!(plan.excess_items(), plan.total_items() - target);
    }

    Ok(())
}

#[test]
fn target_270_scenario() -> TestResult {
    let plan = Simulator::reference().plan(270)?;

    assert_eq!(270 - plan.base_items(), 192);
    assert_eq!(plan.days().len(), 3);
    assert_eq!(plan.total_cost(), 31_656);
    assert_eq!(plan.total_items(), 271);
    assert_eq!(plan.excess_items(), 1);

    let top_up = plan.days().last().and_then(|day| day.top_up()).copied();

    assert_eq!(
        top_up,
        Some(TopUp {
            packs: 3,
            items: 135,
            cost: 20_340,
        })
    );

    Ok(())
}

#[test]
fn top_up_covers_remaining_shortfall_exactly() -> TestResult {
    let simulator = Simulator::reference();
    let pack = simulator.catalog().unlimited().items;

    for &target in simulator.targets().values() {
        let plan = simulator.plan(i64::try_from(target)?)?;

        let limited_items: u64 = plan
            .days()
            .iter()
            .flat_map(|day| day.purchases.iter())
            .filter(|purchase| matches!(purchase, Purchase::Tier(_)))
            .map(Purchase::items)
            .sum();

        let shortfall = target.saturating_sub(plan.base_items() + limited_items);
        let packs = plan
            .days()
            .last()
            .and_then(|day| day.top_up())
            .map_or(0, |top_up| top_up.packs);

        assert_eq!(packs, shortfall.div_ceil(pack), "target {target}");
    }

    Ok(())
}

#[test]
fn output_is_deterministic() -> TestResult {
    let simulator = Simulator::reference();

    for &target in simulator.targets().values() {
        let target = i64::try_from(target)?;

        assert_eq!(
            simulator.compute_optimal_plan(target)?,
            simulator.compute_optimal_plan(target)?
        );
    }

    Ok(())
}

#[test]
fn invalid_target_is_rejected_with_its_value() {
    let text = Simulator::reference().plan_text(271);

    assert!(text.contains("\"271\""), "got {text}");
    assert!(!text.contains("Day 1"));
}
