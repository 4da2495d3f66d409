use super::error::InputError;
use super::outs::Outs;
use super::simulation::Simulator;
use super::spot::Request;
use super::spot::Spot;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire shape of a finished calculation.
///
/// Probabilities are decimal strings with exactly two fraction digits;
/// win, tie, and loss sum to 100.00 by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub win_probability: String,
    pub tie_probability: String,
    pub loss_probability: String,
    pub hit_probability: String,
    pub current_hand: Option<String>,
    pub outs: Vec<String>,
    pub out_details: Breakdown,
    pub opponent_impact: Vec<Impact>,
}

/// Out counts keyed by the category each out makes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub by_type: BTreeMap<String, usize>,
    pub total: usize,
}

/// One point on the win-probability curve over table sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Impact {
    pub opponents: usize,
    pub win_probability: String,
}

impl From<Simulator> for Report {
    fn from(simulator: Simulator) -> Self {
        let spot = simulator.spot();
        let tally = simulator.run();
        let outs = Outs::from(&spot);
        if let Some((category, count)) = tally.histogram().max_by_key(|(_, n)| *n) {
            log::debug!(
                "most frequent made hand: {} ({} of {} trials)",
                category,
                count,
                tally.trials()
            );
        }
        let mut sweep = crate::SWEEP_RIVALS.to_vec();
        sweep.push(spot.rivals());
        sweep.sort_unstable();
        sweep.dedup();
        let opponent_impact = sweep
            .into_iter()
            .map(|rivals| Impact {
                opponents: rivals,
                win_probability: if rivals == spot.rivals() {
                    tally.win().to_string()
                } else {
                    simulator.with_rivals(rivals).run().win().to_string()
                },
            })
            .collect();
        Self {
            win_probability: tally.win().to_string(),
            tie_probability: tally.tie().to_string(),
            loss_probability: tally.loss().to_string(),
            hit_probability: tally.hit().to_string(),
            current_hand: spot.baseline().map(|category| category.to_string()),
            outs: outs.cards().map(|(card, _)| card.to_string()).collect(),
            out_details: Breakdown {
                by_type: outs
                    .breakdown()
                    .into_iter()
                    .map(|(category, count)| (category.to_string(), count))
                    .collect(),
                total: outs.total(),
            },
            opponent_impact,
        }
    }
}

impl TryFrom<&Request> for Report {
    type Error = InputError;
    fn try_from(request: &Request) -> Result<Self, Self::Error> {
        let spot = Spot::try_from(request)?;
        let simulator = Simulator::new(spot, crate::DEFAULT_TRIALS, rand::random());
        Ok(Self::from(simulator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::Card;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;

    fn request(pocket: &[&str], board: &[&str], rivals: usize) -> Request {
        Request {
            player_cards: pocket.iter().map(|s| s.to_string()).collect(),
            board_cards: board.iter().map(|s| s.to_string()).collect(),
            num_opponents: rivals,
        }
    }

    fn report(pocket: &[&str], board: &[&str], rivals: usize) -> Report {
        let spot = Spot::try_from(&request(pocket, board, rivals)).unwrap();
        Report::from(Simulator::new(spot, 1_000, 42))
    }

    fn centi(s: &str) -> i64 {
        s.replace('.', "").parse().unwrap()
    }

    #[test]
    fn wire_keys_are_camel_case() {
        let value = serde_json::to_value(report(&["Ah", "Kh"], &["2h", "7h", "9s"], 2)).unwrap();
        assert!(value["winProbability"].is_string());
        assert!(value["tieProbability"].is_string());
        assert!(value["lossProbability"].is_string());
        assert!(value["hitProbability"].is_string());
        assert!(value["currentHand"].is_string());
        assert!(value["outs"].is_array());
        assert!(value["outDetails"]["byType"].is_object());
        assert!(value["outDetails"]["total"].is_number());
        assert!(value["opponentImpact"][0]["opponents"].is_number());
        assert!(value["opponentImpact"][0]["winProbability"].is_string());
    }

    #[test]
    fn shares_sum_to_exactly_one_hundred() {
        let report = report(&["7c", "2d"], &["9h", "Th", "Jh"], 3);
        let sum = centi(&report.win_probability)
            + centi(&report.tie_probability)
            + centi(&report.loss_probability);
        assert_eq!(sum, 100_00);
    }

    #[test]
    fn lone_pocket_card_preflop_still_reports() {
        let report = report(&["Ah"], &[], 1);
        assert_eq!(report.current_hand, None);
        assert_eq!(report.outs, Vec::<String>::new());
        assert_eq!(report.out_details.total, 0);
    }

    #[test]
    fn flop_names_the_current_hand() {
        let report = report(&["Ah", "Kh"], &["Ad", "Kd", "2c"], 1);
        assert_eq!(report.current_hand.as_deref(), Some("Two Pair"));
    }

    #[test]
    fn impact_curve_is_ascending_and_reuses_current() {
        let report = report(&["Ah", "Kh"], &["2h", "7h", "9s"], 4);
        let opponents = report
            .opponent_impact
            .iter()
            .map(|impact| impact.opponents)
            .collect::<Vec<_>>();
        assert_eq!(opponents, vec![1, 2, 3, 4, 5]);
        let current = report
            .opponent_impact
            .iter()
            .find(|impact| impact.opponents == 4)
            .unwrap();
        assert_eq!(current.win_probability, report.win_probability);
    }

    #[test]
    fn outs_listed_in_canonical_order_with_codes() {
        let report = report(&["Ah", "Kh"], &["2h", "7h", "9s"], 1);
        assert_eq!(report.out_details.total, report.outs.len());
        let deck = crate::cards::deck::Deck::new();
        let order = deck
            .cards()
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>();
        let mut last = 0;
        for code in &report.outs {
            let at = order.iter().position(|c| c == code).unwrap();
            assert!(at >= last);
            last = at;
        }
    }

    #[test]
    fn invalid_requests_never_simulate() {
        let req = request(&["Ah", "Ah"], &[], 1);
        let ace = Card::from((Rank::Ace, Suit::Heart));
        assert_eq!(Report::try_from(&req), Err(InputError::DuplicateCard(ace)));
    }
}
