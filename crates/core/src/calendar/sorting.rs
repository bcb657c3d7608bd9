use std::collections::HashMap;

use chrono::NaiveDate;

use super::types::Event;

/// Sorts events ascending by time of day.
///
/// The sort is stable: events with equal times keep their relative order.
pub fn sort_events_by_time(events: &mut [Event]) {
    events.sort_by_key(|event| event.time);
}

/// Groups events by their date, keeping input order within each date.
pub fn group_events_by_date(events: &[Event]) -> HashMap<NaiveDate, Vec<&Event>> {
    let mut grouped: HashMap<NaiveDate, Vec<&Event>> = HashMap::new();

    for event in events {
        grouped.entry(event.date).or_default().push(event);
    }

    grouped
}

/// Splits a day's events into 24 hour slots by their start hour.
pub fn bucket_events_by_hour(events: &[Event]) -> [Vec<Event>; 24] {
    let mut slots: [Vec<Event>; 24] = Default::default();

    for event in events {
        slots[event.hour() as usize].push(event.clone());
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_sort_events_by_time_is_stable() {
        let date = make_date(2024, 12, 19);
        let mut events = vec![
            Event::new("Afternoon", date, make_time(14, 30)),
            Event::new("Early A", date, make_time(9, 0)),
            Event::new("Early B", date, make_time(9, 0)),
        ];

        sort_events_by_time(&mut events);

        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Early A", "Early B", "Afternoon"]);
    }

    #[test]
    fn test_group_events_by_date() {
        let date1 = make_date(2024, 1, 15);
        let date2 = make_date(2024, 1, 16);
        let events = vec![
            Event::new("Event 1", date1, make_time(9, 0)),
            Event::new("Event 2", date1, make_time(8, 0)),
            Event::new("Event 3", date2, make_time(9, 0)),
        ];

        let grouped = group_events_by_date(&events);

        assert_eq!(grouped.get(&date1).unwrap().len(), 2);
        assert_eq!(grouped.get(&date1).unwrap()[0].title, "Event 1");
        assert_eq!(grouped.get(&date2).unwrap().len(), 1);
    }

    #[test]
    fn test_bucket_events_by_hour() {
        let date = make_date(2024, 12, 19);
        let events = vec![
            Event::new("Midnight", date, make_time(0, 15)),
            Event::new("Late", date, make_time(23, 59)),
            Event::new("Nine A", date, make_time(9, 45)),
            Event::new("Nine B", date, make_time(9, 0)),
        ];

        let slots = bucket_events_by_hour(&events);

        assert_eq!(slots[0].len(), 1);
        assert_eq!(slots[23][0].title, "Late");
        let nine: Vec<_> = slots[9].iter().map(|e| e.title.as_str()).collect();
        assert_eq!(nine, vec!["Nine A", "Nine B"]);
        assert!(slots[12].is_empty());
    }
}
