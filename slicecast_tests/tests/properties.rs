//! Randomized checks of quantization and occlusion invariants.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use slicecast_shared::{
    block::Block,
    camera::Camera,
    color::Rgb,
    projection::quantize,
    renderer::Renderer,
};

const PALETTE: [Rgb; 6] = [
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(255, 205, 50),
    Rgb::new(0, 255, 255),
    Rgb::new(20, 20, 20),
];

#[test]
fn boundaries_resolve_to_lower_slice() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let r: usize = rng.gen_range(1..5_000);
        let slices = quantize(r).unwrap();
        assert_eq!(slices.len(), r);
        let k = rng.gen_range(0..=r);
        let expected = k.saturating_sub(1);
        assert_eq!(slices.find_partition(k as f64 / r as f64), Ok(expected));
    }
}

#[test]
fn every_unit_value_has_a_partition() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let r: usize = rng.gen_range(1..10_000);
        let slices = quantize(r).unwrap();
        let v: f64 = rng.gen_range(0.0..=1.0);
        let i = slices.find_partition(v).unwrap();
        assert!(slices.get(i).unwrap().contains(v));
        if i > 0 {
            assert!(!slices.get(i - 1).unwrap().contains(v));
        }
    }
}

fn random_scene(rng: &mut StdRng) -> Vec<Block> {
    let count = rng.gen_range(1..8);
    let mut depths: Vec<f64> = (1..=count).map(|i| 0.4 * i as f64 + 0.05).collect();
    depths.shuffle(rng);
    depths
        .into_iter()
        .map(|depth| {
            Block::new(depth, rng.gen_range(-1.0..1.0), rng.gen_range(0.0..1.5))
                .unwrap()
                .with_color(PALETTE[rng.gen_range(0..PALETTE.len())])
        })
        .collect()
}

/// Each row shows the nearest block covering it, whatever the list order.
#[test]
fn composite_matches_nearest_cover() {
    let mut rng = StdRng::seed_from_u64(0xb10c);
    let camera = Camera::default();
    for _ in 0..100 {
        let resolution = rng.gen_range(1..300);
        let mut blocks = random_scene(&mut rng);
        let renderer = Renderer::new(blocks.clone(), camera).unwrap();
        let column = renderer.render_column(resolution).unwrap();

        let slices = quantize(resolution).unwrap();
        let coverages: Vec<_> = blocks
            .iter()
            .map(|b| renderer.coverage(b, &slices).unwrap())
            .collect();
        for partition in 0..resolution {
            let expected = blocks
                .iter()
                .zip(&coverages)
                .filter(|(_, c)| c.contains(partition))
                .min_by(|(a, _), (b, _)| a.depth().total_cmp(&b.depth()))
                .map(|(b, _)| b.color())
                .unwrap_or(Rgb::WHITE);
            assert_eq!(column[resolution - 1 - partition], expected);
        }

        blocks.shuffle(&mut rng);
        let shuffled = Renderer::new(blocks, camera).unwrap().render_column(resolution).unwrap();
        assert_eq!(shuffled, column);
    }
}
