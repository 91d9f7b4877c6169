#[cfg(test)]
mod tests {
    use crate::core::attendance::{district_stats, tooltip_text};
    use crate::core::map::{self, spokes};
    use crate::core::video::{embed_url, thumbnail_url};
    use crate::core::{
        Bucket, CAROUSEL_VIDEOS, Carousel, CheckInStatus, District, EmbedMode, MapOverlay,
        NAV_ITEMS, NavState, RevealFeed, ViewMode,
    };

    #[test]
    fn test_attendance_buckets_are_deterministic() {
        assert_eq!(Bucket::classify(ViewMode::Attendance, 91), Bucket::Green);
        assert_eq!(Bucket::classify(ViewMode::Attendance, 84), Bucket::Emerald);
        assert_eq!(Bucket::classify(ViewMode::Attendance, 75), Bucket::Yellow);
        assert_eq!(Bucket::classify(ViewMode::Attendance, 50), Bucket::Red);
    }

    #[test]
    fn test_dataset_buckets_under_attendance() {
        let buckets: Vec<(District, Bucket)> = district_stats(ViewMode::Attendance)
            .iter()
            .map(|s| (s.district, s.bucket))
            .collect();
        assert!(buckets.contains(&(District::Sylhet, Bucket::Green)));
        assert!(buckets.contains(&(District::Dhaka, Bucket::Emerald)));
        assert!(buckets.contains(&(District::Khulna, Bucket::Yellow)));
        assert!(!buckets.iter().any(|(_, b)| *b == Bucket::Red));
    }

    #[test]
    fn test_every_carousel_video_has_urls() {
        for video in CAROUSEL_VIDEOS {
            assert!(thumbnail_url(video.id).is_ok(), "{}", video.id);
            assert!(embed_url(video.id, &EmbedMode::Carousel { autoplay: true }).is_ok());
        }
    }

    #[test]
    fn test_carousel_index_stays_in_bounds() {
        let mut carousel = Carousel::default();
        let last = CAROUSEL_VIDEOS.len() - 1;
        let gestures = [-500.0, -60.0, 10.0, 300.0, -51.0, -50.0, -499.0, 80.0, -1e9, 1e9];
        for _ in 0..10 {
            for offset in gestures {
                carousel.drag_end(offset);
                assert!(carousel.index() <= last);
                carousel.next();
                carousel.next();
                assert!(carousel.index() <= last);
                carousel.autoplay_tick(0.0);
                assert!(carousel.index() <= last);
            }
        }
    }

    #[test]
    fn test_feed_length_after_full_reveal() {
        let mut feed = RevealFeed::check_ins();
        let mut ticks = 0;
        while !feed.is_complete() {
            feed.reveal_next();
            ticks += 1;
        }
        assert_eq!(ticks, 8);
        assert_eq!(feed.visible().len(), 8);
        assert!(
            feed.visible()
                .iter()
                .any(|c| c.status == CheckInStatus::Absent)
        );
    }

    #[test]
    fn test_only_one_dropdown_open() {
        let mut nav = NavState::default();
        let with_dropdowns: Vec<usize> = NAV_ITEMS
            .iter()
            .enumerate()
            .filter(|(_, item)| item.has_dropdown())
            .map(|(i, _)| i)
            .collect();

        for &i in &with_dropdowns {
            nav.toggle_dropdown(i);
            let open = with_dropdowns.iter().filter(|&&j| nav.is_open(j)).count();
            assert_eq!(open, 1);
        }
    }

    #[test]
    fn test_map_selection_hides_other_beams() {
        let mut overlay = MapOverlay::default();
        overlay.select(District::Sylhet);
        let visible: Vec<District> = spokes().filter(|d| overlay.beam_visible(*d)).collect();
        assert_eq!(visible, vec![District::Sylhet]);
    }

    #[test]
    fn test_tooltip_for_each_mode() {
        let record = District::Dhaka.record();
        let lines: Vec<String> = ViewMode::ALL
            .iter()
            .map(|mode| tooltip_text(*mode, mode.value_for(&record)))
            .collect();
        assert_eq!(
            lines,
            vec![
                "Total Employees: 450".to_string(),
                "Attendance Rate: 87%".to_string(),
                "Office Locations: 9".to_string(),
            ]
        );
    }

    #[test]
    fn test_hub_sits_between_spokes() {
        let hub = map::anchor(map::HUB);
        let xs: Vec<f64> = spokes().map(|d| map::anchor(d).x).collect();
        assert!(xs.iter().any(|x| *x < hub.x));
        assert!(xs.iter().any(|x| *x > hub.x));
    }
}
