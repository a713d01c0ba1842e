//! Answer grading, scoring power, and lightning-round category selection.

use super::types::Question;

/// Points for a correct answer outside the power quarter.
pub const BASE_POWER: u32 = 10;
/// Points for a correct power-quarter answer given before the first marker.
pub const FULL_POWER: u32 = 30;
/// Points after the reader passes the `+` marker.
pub const REDUCED_POWER: u32 = 20;

/// Questions per lightning-round category.
pub const CATEGORY_SIZE: u32 = 8;

/// Grade a player's answer against the expected one.
///
/// Case and surrounding whitespace are ignored. Anything from the first `(`
/// of the expected answer is a hint and need not be given. An answer longer
/// than three characters that appears inside the expected answer counts.
pub fn check_answer(given: &str, expected: &str) -> bool {
    let given = given.trim().to_lowercase();
    let expected = expected.to_lowercase();
    let clean = expected.split('(').next().unwrap_or_default().trim();

    given == clean || given == expected || (given.chars().count() > 3 && clean.contains(&given))
}

/// Power a question is worth when it comes on screen.
pub fn starting_power(question: &Question) -> u32 {
    if question.quarter == Question::POWER_QUARTER {
        FULL_POWER
    } else {
        BASE_POWER
    }
}

/// Apply the power markers in one revealed character.
pub fn power_after(question: &Question, current: u32, revealed: char) -> u32 {
    if question.quarter != Question::POWER_QUARTER {
        return current;
    }
    match revealed {
        '+' => REDUCED_POWER,
        '*' => BASE_POWER,
        _ => current,
    }
}

/// Power after the first `revealed` characters have been read out.
pub fn power_at(question: &Question, revealed: usize) -> u32 {
    question
        .question
        .chars()
        .take(revealed)
        .fold(starting_power(question), |power, c| power_after(question, power, c))
}

/// Inclusive range of question parts for a category index.
///
/// Indexes past the third fall back to the first block.
pub fn category_parts(index: usize) -> (u32, u32) {
    let block = if index < 3 { index as u32 } else { 0 };
    let start = block * CATEGORY_SIZE + 1;
    (start, start + CATEGORY_SIZE - 1)
}

/// Questions for the rest of the game once a category is chosen: the chosen
/// lightning-round block followed by every power-quarter question.
pub fn select_category(questions: &[Question], index: usize) -> Vec<Question> {
    let (start, end) = category_parts(index);

    let lightning = questions.iter().filter(|q| {
        q.quarter == Question::LIGHTNING_QUARTER
            && q.part().is_some_and(|part| (start..=end).contains(&part))
    });
    let power = questions
        .iter()
        .filter(|q| q.quarter == Question::POWER_QUARTER);

    lightning.chain(power).cloned().collect()
}
