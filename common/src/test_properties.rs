//! Property-based tests for the board engine.
//!
//! Uses `proptest` to check the invariants that must hold for any feed and
//! any configuration: classification is total and exclusive, filtering
//! never invents records, boards are bounded and sorted, fitted text stays
//! inside its budget and layout never runs past the canvas.

use core::convert::Infallible;

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use proptest::prelude::*;

use crate::board::{Connection, StationBoard, build_station_board};
use crate::config::layout::EPAPER_37_LANDSCAPE;
use crate::config::{MAX_ROWS, StationConfig};
use crate::render::{Connectivity, render_board};
use crate::routes::{RawRecord, RouteKey, filter_routes};
use crate::text::{ELLIPSIS, MeasureText, fit_text};
use crate::thresholds::{Thresholds, Urgency};
use crate::timestamp::{Departure, epoch_seconds};

// ──────────────────── strategies ────────────────────

const CATEGORIES: [&str; 3] = ["T", "B", "S"];
const NUMBERS: [&str; 4] = ["2", "4", "13", "33"];
const DESTINATIONS: [&str; 3] = ["Schlieren, Geissweid", "Zürich, Bahnhofstrasse/HB", "Klusplatz"];

const NOW: &str = "2024-03-01T12:00:00+0000";

fn arb_thresholds() -> impl Strategy<Value = Thresholds> {
    (-30i32..30, -30i32..30, -30i32..30).prop_map(|(u, h, l)| Thresholds::new(u, h, l))
}

fn arb_route() -> impl Strategy<Value = RouteKey<'static>> {
    (0..CATEGORIES.len(), 0..NUMBERS.len(), 0..DESTINATIONS.len())
        .prop_map(|(c, n, d)| RouteKey::new(CATEGORIES[c], NUMBERS[n], DESTINATIONS[d]))
}

fn complete(route: RouteKey<'static>) -> RawRecord<'static> {
    RawRecord {
        category: Some(route.category),
        number: Some(route.number),
        to: Some(route.destination),
        departure: None,
        prognosis: None,
    }
}

fn arb_record() -> impl Strategy<Value = RawRecord<'static>> {
    (arb_route(), 0u8..8).prop_map(|(route, holes)| RawRecord {
        category: (holes != 1).then_some(route.category),
        number: (holes != 2).then_some(route.number),
        to: (holes != 3).then_some(route.destination),
        ..complete(route)
    })
}

/// Feed timestamp `minutes` after [`NOW`]; `None` stands in for a garbled one.
fn timestamp(minutes: Option<i32>) -> String {
    match minutes {
        Some(m) => {
            let total = 12 * 60 + m;
            format!("2024-03-01T{:02}:{:02}:00+0000", total.div_euclid(60), total.rem_euclid(60))
        },
        None => "2024-03-01Txx:yy:00".to_string(),
    }
}

fn arb_departures() -> impl Strategy<Value = Vec<(RouteKey<'static>, Option<i32>)>> {
    prop::collection::vec((arb_route(), prop::option::weighted(0.9, -120i32..240)), 0..24)
}

fn arb_text() -> impl Strategy<Value = String> { "[a-zA-Zäöü ,/.]{0,80}" }

fn arb_urgency() -> impl Strategy<Value = Urgency> {
    prop_oneof![Just(Urgency::Hurry), Just(Urgency::LeaveNow), Just(Urgency::Relaxed)]
}

/// Records the lowest row any pixel is drawn to, paper included.
struct Extent {
    height: u32,
    max_y: i32,
}

impl DrawTarget for Extent {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, _) in pixels {
            self.max_y = self.max_y.max(point.y);
        }
        Ok(())
    }
}

impl OriginDimensions for Extent {
    fn size(&self) -> Size { Size::new(480, self.height) }
}

fn station(urgencies: &[Urgency]) -> StationBoard<'static> {
    StationBoard {
        name: "Zürich, Paradeplatz",
        connections: (0..)
            .zip(urgencies)
            .map(|(m, &urgency)| Connection {
                route: RouteKey::new("T", "2", "Schlieren, Geissweid"),
                departure: Departure::Parsed {
                    clock: "12:10".try_into().unwrap(),
                    minutes: 10 + m,
                },
                urgency,
            })
            .collect(),
    }
}

// ──────────────────── properties ────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Exactly one band holds, picked by unreachable > hurry > leave-now.
    #[test]
    fn classification_is_exclusive(minutes in any::<i32>(), t in arb_thresholds()) {
        let urgency = t.classify(minutes);
        let flags = [urgency.is_unreachable(), urgency.is_hurry(), urgency.is_leave_now()];
        prop_assert!(flags.iter().filter(|&&f| f).count() <= 1);

        let expected = if minutes < t.unreachable {
            Urgency::Unreachable
        } else if minutes < t.hurry {
            Urgency::Hurry
        } else if minutes <= t.leave_now {
            Urgency::LeaveNow
        } else {
            Urgency::Relaxed
        };
        prop_assert_eq!(urgency, expected);
    }

    /// No allow-list, no filtering.
    #[test]
    fn empty_allow_list_is_identity(routes in prop::collection::vec(arb_route(), 0..32)) {
        let records: Vec<_> = routes.iter().copied().map(complete).collect();
        let kept: Vec<_> = filter_routes(&records, &[]).map(|(route, _)| route).collect();
        prop_assert_eq!(kept, routes);
    }

    /// Filtering keeps an order-preserving subset of allow-listed routes.
    #[test]
    fn filter_output_is_monitored_subset(
        records in prop::collection::vec(arb_record(), 0..32),
        monitored in prop::collection::vec(arb_route(), 1..4),
    ) {
        let mut remaining = records.iter();
        for (route, record) in filter_routes(&records, &monitored) {
            prop_assert!(monitored.contains(&route));
            prop_assert!(remaining.any(|r| core::ptr::eq(r, record)), "order changed");
        }
    }

    /// Boards are bounded by `rows`, sorted and free of unreachable rows.
    #[test]
    fn station_board_bounded_and_sorted(
        departures in arb_departures(),
        rows in 0usize..=MAX_ROWS,
        thresholds in arb_thresholds(),
    ) {
        let stamps: Vec<String> = departures.iter().map(|(_, m)| timestamp(*m)).collect();
        let records: Vec<RawRecord> = departures
            .iter()
            .zip(&stamps)
            .map(|((route, _), stamp)| RawRecord { departure: Some(stamp.as_str()), ..complete(*route) })
            .collect();
        let station = StationConfig {
            name: "Zürich, Paradeplatz",
            rows,
            thresholds,
            monitored_routes: &[],
        };

        let board = build_station_board(&station, &records, epoch_seconds(NOW).unwrap());

        prop_assert!(board.connections.len() <= rows);
        prop_assert!(board.connections.windows(2).all(|w| w[0].minutes() <= w[1].minutes()));
        prop_assert!(board.connections.iter().all(|c| !c.urgency.is_unreachable()));
    }

    /// Fitted text never exceeds the budget, and fitting is a no-op on
    /// text that fits.
    #[test]
    fn fitted_text_within_budget(text in arb_text(), budget in 0u32..400) {
        let style = MonoTextStyle::new(EPAPER_37_LANDSCAPE.body_font, BinaryColor::On);
        prop_assume!(budget >= style.text_width(ELLIPSIS));

        let fitted = fit_text(&text, &style, budget);
        prop_assert!(style.text_width(&fitted) <= budget);
        if style.text_width(&text) <= budget && text.len() <= fitted.capacity() {
            prop_assert_eq!(fitted.as_str(), text.as_str());
        }
        prop_assert_eq!(fit_text(&fitted, &style, budget), fitted);
    }

    /// The cursor and every drawn pixel, urgency glyphs included, stay on
    /// the canvas, and drawn stations form a prefix of the board.
    #[test]
    fn layout_stays_on_canvas(
        stations in prop::collection::vec(prop::collection::vec(arb_urgency(), 0..=MAX_ROWS), 0..5),
        height in 40u32..600,
    ) {
        let board: Vec<_> = stations.iter().map(|urgencies| station(urgencies)).collect();
        let mut target = Extent { height, max_y: 0 };
        let status = Connectivity { wifi: true, api: Some(false) };

        let summary = render_board(&mut target, &board, &EPAPER_37_LANDSCAPE, status);

        prop_assert!(summary.cursor_y <= height);
        prop_assert!(target.max_y < height as i32);
        prop_assert!(summary.stations_drawn <= board.len());
        let all_rows: usize = stations.iter().map(Vec::len).sum();
        if !summary.truncated {
            prop_assert_eq!(summary.stations_drawn, board.len());
            prop_assert_eq!(summary.rows_drawn, all_rows);
        } else {
            prop_assert!(summary.rows_drawn < all_rows || summary.stations_drawn < board.len());
        }
    }
}
