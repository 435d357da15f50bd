//! Spoken messages / 播报文本

use crate::catalog::CatalogEntry;

pub const WELCOME: &str = "Welcome to food calories. Ask me about a food item, for example, how many calories in butter salted. ";
pub const WELCOME_REPROMPT: &str = "You can say a food item like apples raw, or say stop. ";
pub const MORE_RESULTS: &str = "There are more food items matching your search. You can say more information for more information. Or say stop to stop the skill. ";
pub const MORE_REPROMPT: &str = "You can say more information or stop. ";
pub const GOODBYE: &str = "Good Bye. ";
pub const UNKNOWN_INTENT: &str = "Unknown intent";
pub const EMPTY_QUERY: &str = "Sorry, I could not understand the food item. Please try again with a food item. ";
pub const NOTHING_TO_CONTINUE: &str = "There is nothing to continue. Please ask about a food item first. ";
pub const INVALID_TURN: &str = "Sorry, I could not handle that request. ";

pub const CARD_TITLE: &str = "Food calories";

/// "100 grams of X contains N calories." for each entry / 每条结果的热量播报
pub fn calories(entries: &[CatalogEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("100 grams of {} contains {} calories. ", e.name, e.value))
        .collect()
}

pub fn not_found(phrase: &str) -> String {
    format!(
        "Could not find any food item for {}. Please try different food item. ",
        phrase
    )
}

/// Summary spoken on the continuation turn / 继续轮次的汇总播报
pub fn more_results(result_count: usize, entries: &[CatalogEntry]) -> String {
    let mut speech = format!(
        "Your search resulted in {} food items. Here are the few food items from search. Please add more keywords from this list for better results. ",
        result_count
    );
    for entry in entries {
        speech.push_str(&entry.name);
        speech.push_str(". ");
    }
    speech
}

/// Card body, one entry per line / 卡片内容
pub fn card_content(entries: &[CatalogEntry]) -> String {
    entries
        .iter()
        .map(|e| format!("{}: {} kcal per 100 g", e.name, e.value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calories_formats_whole_numbers() {
        let entries = vec![
            CatalogEntry::new("butter salted", 717.0),
            CatalogEntry::new("apples raw", 52.5),
        ];
        assert_eq!(
            calories(&entries),
            "100 grams of butter salted contains 717 calories. 100 grams of apples raw contains 52.5 calories. "
        );
    }

    #[test]
    fn test_more_results_lists_names() {
        let speech = more_results(18, &[CatalogEntry::new("orange peel raw", 97.0)]);
        assert!(speech.starts_with("Your search resulted in 18 food items"));
        assert!(speech.ends_with("orange peel raw. "));
    }
}
