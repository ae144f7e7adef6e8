use super::*;
use crate::foundation::core::Canvas;
use crate::geometry::primitives::add_box;
use crate::script::material::{DEFAULT_MATERIAL, Material};

fn blank() -> Frame {
    Frame::new(Canvas::new(40, 40).unwrap(), Rgb8::black())
}

fn tri(a: [f64; 3], b: [f64; 3], c: [f64; 3]) -> PolygonList {
    let mut p = PolygonList::new();
    p.add_triangle(DVec3::from(a), DVec3::from(b), DVec3::from(c));
    p
}

#[test]
fn unknown_material_is_a_render_error() {
    let mut f = blank();
    let polys = tri([0.0, 0.0, 0.0], [10.0, 0.0, 0.0], [0.0, 10.0, 0.0]);
    let err = ScanlineRasterizer::new()
        .draw_polygons(&polys, &mut f, &Lighting::default(), &MaterialTable::new(), "nope")
        .unwrap_err();
    assert!(err.to_string().contains("unknown material 'nope'"));
}

#[test]
fn front_facing_triangle_is_filled_back_facing_is_culled() {
    let r = ScanlineRasterizer::new();
    let materials = MaterialTable::new();
    let lighting = Lighting::default();

    let mut front = blank();
    let ccw = tri([5.0, 5.0, 0.0], [30.0, 5.0, 0.0], [5.0, 30.0, 0.0]);
    r.draw_polygons(&ccw, &mut front, &lighting, &materials, DEFAULT_MATERIAL)
        .unwrap();
    assert!(front.painted_pixels(Rgb8::black()) > 250);
    assert_ne!(front.pixel(10, 10), Some(Rgb8::black()));
    assert_eq!(front.pixel(29, 29), Some(Rgb8::black()));

    let mut back = blank();
    let cw = tri([5.0, 5.0, 0.0], [5.0, 30.0, 0.0], [30.0, 5.0, 0.0]);
    r.draw_polygons(&cw, &mut back, &lighting, &materials, DEFAULT_MATERIAL)
        .unwrap();
    assert_eq!(back.painted_pixels(Rgb8::black()), 0);
}

#[test]
fn nearer_surface_wins_regardless_of_draw_order() {
    let r = ScanlineRasterizer::new();
    let mut materials = MaterialTable::new();
    materials.insert("red", {
        let mut m = Material::uniform(0.0, 0.0, 0.0);
        m.red.ambient = 10.0;
        m
    });
    materials.insert("blue", {
        let mut m = Material::uniform(0.0, 0.0, 0.0);
        m.blue.ambient = 10.0;
        m
    });
    let lighting = Lighting::default();
    let near = tri([0.0, 0.0, 5.0], [39.0, 0.0, 5.0], [0.0, 39.0, 5.0]);
    let far = tri([0.0, 0.0, -5.0], [39.0, 0.0, -5.0], [0.0, 39.0, -5.0]);

    for order in [[(&near, "red"), (&far, "blue")], [(&far, "blue"), (&near, "red")]] {
        let mut f = blank();
        for (polys, mat) in order {
            r.draw_polygons(polys, &mut f, &lighting, &materials, mat)
                .unwrap();
        }
        assert_eq!(f.pixel(5, 5), Some(Rgb8::new(255, 0, 0)));
        assert_eq!(f.depth_at(5, 5), Some(5.0));
    }
}

#[test]
fn box_front_face_covers_its_footprint() {
    let mut polys = PolygonList::new();
    add_box(&mut polys, 10.0, 30.0, 0.0, 20.0, 20.0, 20.0);
    let mut f = blank();
    ScanlineRasterizer::new()
        .draw_polygons(
            &polys,
            &mut f,
            &Lighting::default(),
            &MaterialTable::new(),
            DEFAULT_MATERIAL,
        )
        .unwrap();
    for (x, y) in [(11, 11), (20, 20), (29, 29)] {
        assert_ne!(f.pixel(x, y), Some(Rgb8::black()), "({x}, {y})");
        assert_eq!(f.depth_at(x, y), Some(0.0));
    }
    assert_eq!(f.pixel(5, 5), Some(Rgb8::black()));
}

#[test]
fn lines_cover_both_endpoints() {
    let mut edges = EdgeList::new();
    edges.add_edge(DVec3::new(2.0, 3.0, 0.0), DVec3::new(30.0, 17.0, 0.0));
    let mut f = blank();
    ScanlineRasterizer::new()
        .draw_lines(&edges, &mut f, Rgb8::white())
        .unwrap();
    assert_eq!(f.pixel(2, 3), Some(Rgb8::white()));
    assert_eq!(f.pixel(30, 17), Some(Rgb8::white()));
    assert_eq!(f.painted_pixels(Rgb8::black()), 29);
}

#[test]
fn huge_box_is_clipped_to_the_canvas() {
    let mut polys = PolygonList::new();
    add_box(&mut polys, -1.0e9, 1.0e9, 0.0, 2.0e9, 2.0e9, 10.0);
    let mut f = Frame::new(Canvas::new(20, 20).unwrap(), Rgb8::black());
    ScanlineRasterizer::new()
        .draw_polygons(
            &polys,
            &mut f,
            &Lighting::default(),
            &MaterialTable::new(),
            DEFAULT_MATERIAL,
        )
        .unwrap();
    assert_eq!(f.painted_pixels(Rgb8::black()), 400);
    assert_eq!(f.depth_at(0, 0), Some(0.0));
    assert_eq!(f.depth_at(19, 19), Some(0.0));
}

#[test]
fn far_reaching_lines_only_touch_visible_pixels() {
    let mut edges = EdgeList::new();
    edges.add_edge(DVec3::new(0.0, 0.0, 0.0), DVec3::new(3.0e15, 0.0, 0.0));
    edges.add_edge(DVec3::new(-100.0, -100.0, 0.0), DVec3::new(-50.0, -80.0, 0.0));
    let mut f = Frame::new(Canvas::new(20, 20).unwrap(), Rgb8::black());
    ScanlineRasterizer::new()
        .draw_lines(&edges, &mut f, Rgb8::white())
        .unwrap();
    assert_eq!(f.painted_pixels(Rgb8::black()), 20);
    for x in 0..20 {
        assert_eq!(f.pixel(x, 0), Some(Rgb8::white()), "x = {x}");
    }
}

#[test]
fn clipped_line_matches_its_visible_part() {
    let rasterizer = ScanlineRasterizer::new();
    let mut clipped = blank();
    let mut edges = EdgeList::new();
    edges.add_edge(DVec3::new(-60.0, -25.0, 0.0), DVec3::new(90.0, 50.0, 0.0));
    rasterizer
        .draw_lines(&edges, &mut clipped, Rgb8::white())
        .unwrap();

    // Same parameterization, every step plotted.
    let mut full = blank();
    let (a, d) = (DVec3::new(-60.0, -25.0, 0.0), DVec3::new(150.0, 75.0, 0.0));
    for s in 0..=150u32 {
        let p = a + d * (f64::from(s) / 150.0);
        full.plot(p.x.round() as i64, p.y.round() as i64, p.z, Rgb8::white());
    }
    assert!(clipped.painted_pixels(Rgb8::black()) > 0);
    assert_eq!(clipped.color(), full.color());
}
