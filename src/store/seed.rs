//! Default categories and sample questions for a fresh database.

use tracing::info;

use super::errors::StoreResult;
use super::models::{Category, NewQuestion};
use super::QuestionStore;

/// The six standard trivia categories, in id order
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

/// (question, answer, category, difficulty)
const SAMPLE_QUESTIONS: &[(&str, &str, i64, i64)] = &[
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("Which planet has the most moons?", "Saturn", 1, 2),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("How many paintings did Van Gogh sell in his lifetime?", "One", 2, 4),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3, 3),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("Which dung beetle was worshipped by the ancient Egyptians?", "Scarab", 4, 4),
    ("Who invented Peanut Butter?", "George Washington Carver", 4, 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 6, 3),
    ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 6, 4),
];

/// Seed categories and sample questions when the store holds no categories.
///
/// Returns the number of questions inserted; 0 means the store was left alone.
pub async fn seed_if_empty(store: &dyn QuestionStore) -> StoreResult<usize> {
    if !store.categories().await?.is_empty() {
        info!("store already has categories, skipping seed");
        return Ok(0);
    }

    for (id, kind) in DEFAULT_CATEGORIES {
        store.insert_category(Category::new(id, kind)).await?;
    }

    for (question, answer, category, difficulty) in SAMPLE_QUESTIONS {
        store
            .insert_question(NewQuestion::new(*question, *answer, *category, *difficulty))
            .await?;
    }

    info!(
        categories = DEFAULT_CATEGORIES.len(),
        questions = SAMPLE_QUESTIONS.len(),
        "seeded trivia store"
    );
    Ok(SAMPLE_QUESTIONS.len())
}
