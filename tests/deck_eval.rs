use scrolldeck::{Deck, Evaluator, SlideIndex};

fn deck() -> Deck {
    Deck::standard(["Home", "Introduction", "Announcements"])
}

fn opacities(p: f64) -> Vec<f64> {
    Evaluator::eval_progress(&deck(), p)
        .unwrap()
        .nodes
        .iter()
        .map(|n| n.opacity)
        .collect()
}

fn active(p: f64) -> usize {
    Evaluator::eval_progress(&deck(), p).unwrap().active.0
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-12, "{a} != {b}");
}

#[test]
fn first_slide_fades_out_over_the_opening_third() {
    assert_eq!(opacities(-0.5)[0], 1.0);
    assert_eq!(opacities(0.0)[0], 1.0);
    assert_close(opacities(0.15)[0], 0.5);
    assert_eq!(opacities(0.3)[0], 0.0);
    assert_eq!(opacities(0.5)[0], 0.0);
    assert_eq!(opacities(1.5)[0], 0.0);
}

#[test]
fn middle_slide_rises_holds_and_falls() {
    assert_eq!(opacities(0.3)[1], 0.0);
    assert_close(opacities(0.325)[1], 0.5);
    assert_eq!(opacities(0.35)[1], 1.0);
    assert_eq!(opacities(0.5)[1], 1.0);
    assert_eq!(opacities(0.65)[1], 1.0);
    assert_close(opacities(0.675)[1], 0.5);
    assert_eq!(opacities(0.7)[1], 0.0);
}

#[test]
fn last_slide_fades_in_and_stays() {
    assert_eq!(opacities(0.65)[2], 0.0);
    assert_close(opacities(0.675)[2], 0.5);
    assert_eq!(opacities(0.7)[2], 1.0);
    assert_eq!(opacities(0.9)[2], 1.0);
    assert_eq!(opacities(2.0)[2], 1.0);
}

#[test]
fn active_slide_step_boundaries() {
    assert_eq!(active(0.0), 1);
    assert_eq!(active(0.29999), 1);
    assert_eq!(active(0.3), 2);
    assert_eq!(active(0.64999), 2);
    assert_eq!(active(0.65), 3);
    assert_eq!(active(1.0), 3);
}

// The highlight hands over at the start of the last fade-in (0.65), not its
// completion (0.7): there is a narrow window where navigation points at the
// last slide while the middle one is still partially visible.
#[test]
fn highlight_leads_the_final_crossfade() {
    let frame = Evaluator::eval_progress(&deck(), 0.675).unwrap();
    assert_eq!(frame.active, SlideIndex(3));
    assert!(frame.nodes[1].opacity > 0.0);
    assert!(frame.nodes[2].opacity < 1.0);
}

#[test]
fn crossfade_handoff_is_clean_across_the_sweep() {
    let d = deck();
    let mut prev_active = 0usize;

    // midpoint grid so no sample lands exactly on a breakpoint
    for i in 0..200 {
        let p = (i as f64 + 0.5) / 200.0;
        let frame = Evaluator::eval_progress(&d, p).unwrap();
        let ops: Vec<f64> = frame.nodes.iter().map(|n| n.opacity).collect();

        let fully_opaque = ops.iter().filter(|o| **o == 1.0).count();
        let in_transition = ops.iter().filter(|o| **o > 0.0 && **o < 1.0).count();
        let visible = ops.iter().filter(|o| **o > 0.0).count();

        assert!(visible >= 1, "all slides transparent at p={p}");
        assert!(fully_opaque <= 1, "double peak at p={p}");
        assert!(in_transition <= 2, "more than two slides mid-fade at p={p}");
        if in_transition == 0 {
            assert_eq!(fully_opaque, 1, "no dominant slide at p={p}");
        }

        assert!(frame.active.0 >= prev_active, "highlight moved backwards at p={p}");
        prev_active = frame.active.0;
    }
}
