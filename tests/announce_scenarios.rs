// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scenario tests for the three observed device variants.

use powercast::{Announce, Device, MemorySink, SinkEvent, StateChange};

/// Announces the device into a fresh sink and returns the emitted lines.
fn announce_lines(device: &Device) -> Vec<String> {
    let mut sink = MemorySink::new();
    device.announce(&mut sink);
    sink.lines().into_iter().map(str::to_string).collect()
}

// ============================================================================
// Scenario A: audio-only device (EchoSub)
// ============================================================================

mod audio_only_speaker {
    use super::*;

    #[test]
    fn fresh_instance_announces_off() {
        let speaker = Device::audio_only("EchoSub");
        let lines = announce_lines(&speaker);
        assert_eq!(lines, vec!["EchoSub vocalizing: device off"]);
    }

    #[test]
    fn power_cycle_is_reflected_in_announcements() {
        let mut speaker = Device::audio_only("EchoSub");

        speaker.power_on();
        assert!(announce_lines(&speaker)[0].contains("device on"));

        speaker.power_off();
        assert!(announce_lines(&speaker)[0].contains("device off"));
    }

    #[test]
    fn status_follows_most_recent_power_call() {
        let mut speaker = Device::audio_only("EchoSub");
        let script: &[(fn(&mut Device), &str)] = &[
            (Device::power_on, "device on"),
            (Device::power_on, "device on"),
            (Device::power_off, "device off"),
            (Device::power_on, "device on"),
            (Device::power_off, "device off"),
            (Device::power_off, "device off"),
        ];

        for (call, expected) in script {
            call(&mut speaker);
            assert_eq!(speaker.status_text(), *expected);
        }
    }

    #[test]
    fn one_separator_per_announcement() {
        let speaker = Device::audio_only("EchoSub");
        let mut sink = MemorySink::new();
        speaker.announce(&mut sink);
        speaker.announce(&mut sink);
        assert_eq!(sink.separator_count(), 2);
        assert_eq!(sink.lines().len(), 2);
    }
}

// ============================================================================
// Scenario B: audio+video device (FireTV)
// ============================================================================

mod audio_video_tv {
    use super::*;

    #[test]
    fn announce_emits_two_lines_then_separator() {
        let tv = Device::audio_video("FireTV");
        let mut sink = MemorySink::new();
        tv.announce(&mut sink);

        let events = sink.events();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], SinkEvent::Line { .. }));
        assert!(matches!(events[1], SinkEvent::Line { .. }));
        assert_eq!(events[2], SinkEvent::Separator);
    }

    #[test]
    fn vocalize_line_precedes_render_line() {
        let tv = Device::audio_video("FireTV");
        let lines = announce_lines(&tv);
        assert_eq!(
            lines,
            vec![
                "FireTV vocalizing: device off",
                "FireTV rendering: device off",
            ]
        );
    }

    #[test]
    fn both_lines_carry_identical_status_text() {
        let mut tv = Device::audio_video("FireTV");

        for _ in 0..3 {
            let lines = announce_lines(&tv);
            let audio = lines[0].split_once(": ").unwrap().1.to_string();
            let video = lines[1].split_once(": ").unwrap().1.to_string();
            assert_eq!(audio, video);
            tv.power_on();
        }
    }
}

// ============================================================================
// Scenario C: battery+audio+video device (Kindle)
// ============================================================================

mod battery_reader {
    use super::*;

    #[test]
    fn scripted_lifecycle_matches_expected_reports() {
        let mut reader = Device::battery_audio_video("Kindle");
        assert_eq!(reader.status_text(), "device off, battery life at 100%");

        reader.plug().unwrap();
        assert_eq!(
            reader.status_text(),
            "device off, battery life at 100%, and charging"
        );

        reader.unplug().unwrap();
        assert_eq!(reader.status_text(), "device off, battery life at 100%");

        reader.update_charge(-0.01).unwrap();
        assert_eq!(reader.status_text(), "device off, battery life at 99%");

        reader.power_on();
        assert_eq!(reader.status_text(), "battery life at 99%");

        reader.plug().unwrap();
        assert_eq!(reader.status_text(), "battery life at 99%, and charging");
    }

    #[test]
    fn battery_text_supersedes_power_text_on_both_channels() {
        let reader = Device::battery_audio_video("Kindle");
        let lines = announce_lines(&reader);
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert!(line.contains("battery life at 100%"));
            // The bare power text never leaks through
            assert!(!line.ends_with("device off"));
        }
    }

    #[test]
    fn prefix_law_tracks_power_flag() {
        let mut reader = Device::battery_audio_video("Kindle");
        assert!(reader.status_text().starts_with("device off, "));

        reader.power_on();
        assert!(!reader.status_text().starts_with("device off, "));

        reader.power_off();
        assert!(reader.status_text().starts_with("device off, "));
    }

    #[test]
    fn suffix_law_tracks_charging_flag() {
        let mut reader = Device::battery_audio_video("Kindle");
        assert!(!reader.status_text().ends_with(", and charging"));

        reader.plug().unwrap();
        assert!(reader.status_text().ends_with(", and charging"));

        reader.unplug().unwrap();
        assert!(!reader.status_text().ends_with(", and charging"));
    }

    #[test]
    fn charging_and_power_are_independent() {
        let mut reader = Device::battery_audio_video("Kindle");

        reader.plug().unwrap();
        assert!(!reader.is_on());

        reader.power_on();
        assert!(reader.battery().unwrap().is_charging());

        reader.power_off();
        assert!(reader.battery().unwrap().is_charging());

        reader.unplug().unwrap();
        assert!(!reader.is_on());
    }

    #[test]
    fn charge_is_not_clamped() {
        let mut reader = Device::battery_audio_video("Kindle");

        reader.update_charge(0.5).unwrap();
        assert_eq!(reader.status_text(), "device off, battery life at 150%");

        reader.update_charge(-3.0).unwrap();
        assert_eq!(reader.status_text(), "device off, battery life at -150%");
    }

    #[test]
    fn same_lifecycle_via_state_changes() {
        let mut reader = Device::battery_audio_video("Kindle");

        let script = StateChange::batch(vec![
            StateChange::plug(),
            StateChange::unplug(),
            StateChange::charge_delta(-0.01),
            StateChange::power_on(),
            StateChange::plug(),
        ]);
        assert!(reader.apply(&script).unwrap());
        assert_eq!(reader.status_text(), "battery life at 99%, and charging");
    }
}
