use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};
use geopred::predicates::{classify_eps, Segment};
use geopred::{GeomCfg, Point2, Polygon};
use serde_json::{json, Value};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod polygon_file;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Check polygon boundaries with tolerance-aware 2D predicates")]
struct Cmd {
    /// Absolute per-axis tolerance used by every predicate
    #[arg(long, global = true, default_value_t = geopred::EPSILON)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Does the edge chain form a cycle?
    Closed {
        #[arg(long)]
        input: PathBuf,
    },
    /// Do any two edges cross?
    Simple {
        #[arg(long)]
        input: PathBuf,
    },
    /// Is a point inside the polygon?
    Contains {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
        /// Treat boundary points as outside
        #[arg(long)]
        strict: bool,
    },
    /// Classify two segments given as `X1 Y1 X2 Y2`
    Intersect {
        #[arg(long, required = true, num_args = 4, allow_negative_numbers = true)]
        a: Vec<f64>,
        #[arg(long, required = true, num_args = 4, allow_negative_numbers = true)]
        b: Vec<f64>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = GeomCfg { eps: cmd.eps };
    let out = match cmd.action {
        Action::Closed { input } => closed(&polygon_file::load(input)?, cfg)?,
        Action::Simple { input } => simple(&polygon_file::load(input)?, cfg)?,
        Action::Contains {
            input,
            x,
            y,
            strict,
        } => contains(
            &polygon_file::load(input)?,
            Point2::new(x, y),
            strict,
            cfg,
        )?,
        Action::Intersect { a, b } => intersect(&a, &b, cfg)?,
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn closed(poly: &Polygon, cfg: GeomCfg) -> Result<Value> {
    let closed = poly.is_closed_eps(cfg.eps)?;
    tracing::info!(edges = poly.edge_count(), eps = cfg.eps, closed, "closed");
    Ok(json!({ "closed": closed }))
}

fn simple(poly: &Polygon, cfg: GeomCfg) -> Result<Value> {
    let simple = poly.is_simple_eps(cfg.eps)?;
    let violation = if simple {
        None
    } else {
        poly.first_violation_eps(cfg.eps)?
    };
    tracing::info!(edges = poly.edge_count(), eps = cfg.eps, simple, "simple");
    Ok(match violation {
        Some((i, j, hit)) => json!({
            "simple": simple,
            "violation": { "edges": [i, j], "classification": format!("{hit:?}") }
        }),
        None => json!({ "simple": simple }),
    })
}

fn contains(poly: &Polygon, p: Point2<f64>, strict: bool, cfg: GeomCfg) -> Result<Value> {
    let location = poly.locate_eps(&p, cfg.eps)?;
    let contained = location.is_contained(strict);
    tracing::info!(x = p.x, y = p.y, strict, contained, "contains");
    Ok(json!({
        "contained": contained,
        "location": format!("{location:?}")
    }))
}

fn segment_from(v: &[f64]) -> Result<Segment> {
    ensure!(
        v.len() == 4,
        "a segment needs 4 coordinates (X1 Y1 X2 Y2), got {}",
        v.len()
    );
    Ok(Segment::new(Point2::new(v[0], v[1]), Point2::new(v[2], v[3])))
}

fn intersect(a: &[f64], b: &[f64], cfg: GeomCfg) -> Result<Value> {
    let hit = classify_eps(&segment_from(a)?, &segment_from(b)?, cfg.eps);
    tracing::info!(kind = ?hit, code = hit.code(), "intersect");
    Ok(json!({ "classification": format!("{hit:?}"), "code": hit.code() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use geopred::{Edge, EPSILON};

    fn cfg() -> GeomCfg {
        GeomCfg::default()
    }

    fn square() -> Polygon {
        Polygon::from_ring(&[
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(0.0, 3.0),
        ])
    }

    #[test]
    fn parses_intersect_with_negative_coordinates() {
        let cmd = Cmd::try_parse_from([
            "cli", "intersect", "--a", "-1", "-1", "1", "1", "--b", "-1", "1", "1", "-1",
        ])
        .unwrap();
        match cmd.action {
            Action::Intersect { a, b } => {
                assert_eq!(a, vec![-1.0, -1.0, 1.0, 1.0]);
                assert_eq!(b, vec![-1.0, 1.0, 1.0, -1.0]);
            }
            _ => panic!("expected intersect"),
        }
        assert_eq!(cmd.eps, EPSILON);
    }

    #[test]
    fn intersect_reports_code() {
        let out = intersect(&[0.0, 0.0, 1.0, 1.0], &[0.0, 1.0, 1.0, 0.0], cfg()).unwrap();
        assert_eq!(out["classification"], "Crossing");
        assert_eq!(out["code"], 1);
    }

    #[test]
    fn intersect_requires_both_segments() {
        let missing_a = Cmd::try_parse_from(["cli", "intersect", "--b", "0", "0", "1", "1"]);
        assert!(missing_a.is_err());
        let missing_b = Cmd::try_parse_from(["cli", "intersect", "--a", "0", "0", "1", "1"]);
        assert!(missing_b.is_err());
    }

    #[test]
    fn short_segment_is_an_error_not_a_panic() {
        let err = intersect(&[], &[0.0, 0.0, 1.0, 1.0], cfg()).unwrap_err();
        assert!(err.to_string().contains("got 0"));
        assert!(intersect(&[0.0, 0.0, 1.0], &[0.0, 0.0, 1.0, 1.0], cfg()).is_err());
    }

    #[test]
    fn eps_flag_feeds_cfg() {
        let cmd = Cmd::try_parse_from(["cli", "--eps", "0.2", "closed", "--input", "p.json"]).unwrap();
        assert_eq!(GeomCfg { eps: cmd.eps }.eps, 0.2);
        let seg = |x1: f64, y1: f64, x2: f64, y2: f64| Segment::new(Point2::new(x1, y1), Point2::new(x2, y2));
        // last link ends 0.1 short of the first vertex
        let gappy = Polygon::from_segments(&[
            seg(0.0, 0.0, 3.0, 0.0),
            seg(3.0, 0.0, 1.5, 3.0),
            seg(1.5, 3.0, 0.1, 0.1),
        ]);
        assert_eq!(closed(&gappy, cfg()).unwrap()["closed"], false);
        assert_eq!(closed(&gappy, GeomCfg { eps: 0.2 }).unwrap()["closed"], true);
    }

    #[test]
    fn simple_reports_violating_pair() {
        let bowtie = Polygon::from_ring(&[
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(3.0, 0.0),
            Point2::new(0.0, 3.0),
        ]);
        let out = simple(&bowtie, cfg()).unwrap();
        assert_eq!(out["simple"], false);
        assert_eq!(out["violation"]["edges"], json!([0, 2]));
        assert_eq!(simple(&square(), cfg()).unwrap()["simple"], true);
        assert!(simple(&square(), cfg()).unwrap().get("violation").is_none());
        // fewer than 3 edges: not simple, and no violating pair to report
        let two = Polygon::from_ring(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)]);
        let out = simple(&two, cfg()).unwrap();
        assert_eq!(out["simple"], false);
        assert!(out.get("violation").is_none());
    }

    #[test]
    fn contains_honours_strict() {
        let sq = square();
        let edge_pt = Point2::new(1.5, 0.0);
        assert_eq!(contains(&sq, edge_pt, false, cfg()).unwrap()["contained"], true);
        let strict = contains(&sq, edge_pt, true, cfg()).unwrap();
        assert_eq!(strict["contained"], false);
        assert_eq!(strict["location"], "Boundary");
    }

    #[test]
    fn dangling_vertex_surfaces_as_error() {
        let mut sq = square();
        sq.edges[2] = Edge::new(2, 11);
        assert!(closed(&sq, cfg()).is_err());
    }
}
