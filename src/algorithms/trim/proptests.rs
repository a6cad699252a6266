//! Property tests for the trimming engines on small synthetic inputs.

use proptest::prelude::*;

use super::test_support::brute_force_best;
use super::*;

fn arb_rect(lo: i64, hi: i64) -> impl Strategy<Value = Rect> {
    (lo..hi, lo..hi, 1i64..6, 1i64..6).prop_map(move |(x, y, w, h)| {
        Rect::new(x, y, (x + w).min(hi), (y + h).min(hi)).unwrap()
    })
}

fn arb_case() -> impl Strategy<Value = (Rect, Vec<Rect>)> {
    (arb_rect(0, 8), prop::collection::vec(arb_rect(-2, 10), 0..7))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn guillotine_result_is_valid((candidate, blockers) in arb_case()) {
        let got = GuillotineTrimmer::default().trim(&candidate, &blockers).unwrap();
        if let Some(rect) = got {
            prop_assert!(candidate.contains(&rect));
            for b in &blockers {
                prop_assert!(!rect.intersects(b), "{} overlaps blocker {}", rect, b);
            }
        }
    }

    #[test]
    fn guillotine_is_optimal((candidate, blockers) in arb_case()) {
        let got = GuillotineTrimmer::default().trim(&candidate, &blockers).unwrap();
        prop_assert_eq!(got, brute_force_best(&candidate, &blockers));
    }

    #[test]
    fn histogram_agrees_with_guillotine((candidate, blockers) in arb_case()) {
        let g = GuillotineTrimmer::default().trim(&candidate, &blockers).unwrap();
        let h = HistogramTrimmer::default().trim(&candidate, &blockers).unwrap();
        prop_assert_eq!(g, h);
    }

    #[test]
    fn blocker_order_does_not_matter((candidate, mut blockers) in arb_case()) {
        let t = GuillotineTrimmer::default();
        let forward = t.trim(&candidate, &blockers).unwrap();
        blockers.reverse();
        prop_assert_eq!(forward, t.trim(&candidate, &blockers).unwrap());
    }
}
