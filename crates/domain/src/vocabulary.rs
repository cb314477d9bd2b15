use std::{collections::BTreeMap, fmt, sync::LazyLock};

/// An entry of the static exercise catalog.
///
/// The catalog is compiled into the application and immutable for the
/// process lifetime. Matching and filtering always hand out references
/// into it, never copies.
#[derive(Debug, PartialEq, Eq)]
pub struct ExerciseDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub muscle_groups: &'static [&'static str],
    pub category: Category,
    pub equipment: &'static [&'static str],
    pub movement_pattern: Option<MovementPattern>,
    pub difficulty: DifficultyLevel,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Strength,
    Cardio,
    Flexibility,
    Yoga,
}

impl Category {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Category::Strength => "strength",
            Category::Cardio => "cardio",
            Category::Flexibility => "flexibility",
            Category::Yoga => "yoga",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MovementPattern {
    Squat,
    Hinge,
    Push,
    Pull,
    Cardio,
    Flexibility,
}

impl MovementPattern {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            MovementPattern::Squat => "squat",
            MovementPattern::Hinge => "hinge",
            MovementPattern::Push => "push",
            MovementPattern::Pull => "pull",
            MovementPattern::Cardio => "cardio",
            MovementPattern::Flexibility => "flexibility",
        }
    }
}

impl fmt::Display for MovementPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The full immutable catalog.
#[must_use]
pub fn all() -> &'static [ExerciseDefinition] {
    EXERCISES
}

/// Looks up an exercise by its stable id.
#[must_use]
pub fn by_id(id: &str) -> Option<&'static ExerciseDefinition> {
    EXERCISES_BY_ID.get(id).copied()
}

#[must_use]
pub fn by_category(category: Category) -> Vec<&'static ExerciseDefinition> {
    EXERCISES
        .iter()
        .filter(|e| e.category == category)
        .collect()
}

#[must_use]
pub fn by_muscle_group(muscle_group: &str) -> Vec<&'static ExerciseDefinition> {
    let muscle_group = muscle_group.to_lowercase();
    EXERCISES
        .iter()
        .filter(|e| {
            e.muscle_groups
                .iter()
                .any(|g| g.to_lowercase().contains(&muscle_group))
        })
        .collect()
}

#[must_use]
pub fn by_equipment(equipment: &str) -> Vec<&'static ExerciseDefinition> {
    let equipment = equipment.to_lowercase();
    EXERCISES
        .iter()
        .filter(|e| {
            e.equipment
                .iter()
                .any(|eq| eq.to_lowercase().contains(&equipment))
        })
        .collect()
}

/// Returns up to `limit` exercises, easiest first, optionally restricted to
/// one category. Stands in for usage statistics the app does not track yet.
#[must_use]
pub fn popular(category: Option<Category>, limit: usize) -> Vec<&'static ExerciseDefinition> {
    let mut exercises = EXERCISES
        .iter()
        .filter(|e| category.is_none_or(|c| e.category == c))
        .collect::<Vec<_>>();
    exercises.sort_by_key(|e| e.difficulty);
    exercises.truncate(limit);
    exercises
}

/// Suggests exercises working any of the given muscle groups, excluding the
/// given exercise ids.
#[must_use]
pub fn suggested(
    muscle_groups: &[&str],
    exclude: &[&str],
) -> Vec<&'static ExerciseDefinition> {
    EXERCISES
        .iter()
        .filter(|e| {
            !exclude.contains(&e.id)
                && e.muscle_groups.iter().any(|group| {
                    muscle_groups
                        .iter()
                        .any(|target| group.to_lowercase().contains(&target.to_lowercase()))
                })
        })
        .take(5)
        .collect()
}

/// Suggests exercises working the antagonists of the muscle groups covered
/// by the given exercises.
#[must_use]
pub fn complementary(exercise_ids: &[&str]) -> Vec<&'static ExerciseDefinition> {
    let mut groups: Vec<&'static str> = Vec::new();
    for group in exercise_ids
        .iter()
        .filter_map(|id| by_id(id))
        .flat_map(|e| e.muscle_groups.iter())
        .flat_map(|g| antagonists(g).iter().copied())
    {
        if !groups.contains(&group) {
            groups.push(group);
        }
    }
    suggested(&groups, exercise_ids)
}

fn antagonists(muscle_group: &str) -> &'static [&'static str] {
    match muscle_group {
        "chest" => &["back"],
        "back" => &["chest"],
        "biceps" => &["triceps"],
        "triceps" => &["biceps"],
        "quadriceps" => &["hamstrings"],
        "hamstrings" => &["quadriceps"],
        "shoulders" => &["lats"],
        _ => &[],
    }
}

static EXERCISES_BY_ID: LazyLock<BTreeMap<&'static str, &'static ExerciseDefinition>> =
    LazyLock::new(|| EXERCISES.iter().map(|e| (e.id, e)).collect());

static EXERCISES: &[ExerciseDefinition] = &[
    // Strength - compound movements
    ExerciseDefinition {
        id: "squat-back-barbell",
        name: "Back Squat",
        aliases: &["squat", "back squat", "barbell squat", "squats"],
        muscle_groups: &["quadriceps", "glutes", "core"],
        category: Category::Strength,
        equipment: &["barbell", "squat rack"],
        movement_pattern: Some(MovementPattern::Squat),
        difficulty: DifficultyLevel::Intermediate,
    },
    ExerciseDefinition {
        id: "deadlift-conventional",
        name: "Conventional Deadlift",
        aliases: &["deadlift", "deadlifts", "conventional deadlift", "dead lift"],
        muscle_groups: &["hamstrings", "glutes", "back", "core"],
        category: Category::Strength,
        equipment: &["barbell"],
        movement_pattern: Some(MovementPattern::Hinge),
        difficulty: DifficultyLevel::Intermediate,
    },
    ExerciseDefinition {
        id: "bench-press-barbell",
        name: "Barbell Bench Press",
        aliases: &["bench press", "bench", "barbell bench", "chest press"],
        muscle_groups: &["chest", "shoulders", "triceps"],
        category: Category::Strength,
        equipment: &["barbell", "bench"],
        movement_pattern: Some(MovementPattern::Push),
        difficulty: DifficultyLevel::Intermediate,
    },
    ExerciseDefinition {
        id: "overhead-press",
        name: "Overhead Press",
        aliases: &["overhead press", "shoulder press", "military press", "ohp"],
        muscle_groups: &["shoulders", "triceps", "core"],
        category: Category::Strength,
        equipment: &["barbell"],
        movement_pattern: Some(MovementPattern::Push),
        difficulty: DifficultyLevel::Intermediate,
    },
    ExerciseDefinition {
        id: "pull-up",
        name: "Pull-up",
        aliases: &["pull up", "pullup", "pull ups", "pullups"],
        muscle_groups: &["lats", "biceps", "back"],
        category: Category::Strength,
        equipment: &["pull up bar"],
        movement_pattern: Some(MovementPattern::Pull),
        difficulty: DifficultyLevel::Advanced,
    },
    // Strength - isolation exercises
    ExerciseDefinition {
        id: "bicep-curl-dumbbell",
        name: "Dumbbell Bicep Curl",
        aliases: &["bicep curl", "bicep curls", "dumbbell curl", "arm curl"],
        muscle_groups: &["biceps"],
        category: Category::Strength,
        equipment: &["dumbbells"],
        movement_pattern: Some(MovementPattern::Pull),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "tricep-extension-dumbbell",
        name: "Dumbbell Tricep Extension",
        aliases: &[
            "tricep extension",
            "tricep extensions",
            "skull crusher",
            "overhead tricep",
        ],
        muscle_groups: &["triceps"],
        category: Category::Strength,
        equipment: &["dumbbells"],
        movement_pattern: Some(MovementPattern::Push),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "lateral-raise",
        name: "Lateral Raise",
        aliases: &["lateral raise", "lateral raises", "side raise", "side raises"],
        muscle_groups: &["shoulders"],
        category: Category::Strength,
        equipment: &["dumbbells"],
        movement_pattern: Some(MovementPattern::Push),
        difficulty: DifficultyLevel::Beginner,
    },
    // Cardio
    ExerciseDefinition {
        id: "treadmill-running",
        name: "Treadmill Running",
        aliases: &["treadmill", "running", "treadmill run", "run"],
        muscle_groups: &["legs", "glutes", "cardiovascular"],
        category: Category::Cardio,
        equipment: &["treadmill"],
        movement_pattern: Some(MovementPattern::Cardio),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "stationary-bike",
        name: "Stationary Bike",
        aliases: &["bike", "cycling", "stationary bike", "exercise bike"],
        muscle_groups: &["legs", "glutes", "cardiovascular"],
        category: Category::Cardio,
        equipment: &["stationary bike"],
        movement_pattern: Some(MovementPattern::Cardio),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "elliptical",
        name: "Elliptical Machine",
        aliases: &["elliptical", "elliptical machine", "cross trainer"],
        muscle_groups: &["legs", "arms", "cardiovascular"],
        category: Category::Cardio,
        equipment: &["elliptical"],
        movement_pattern: Some(MovementPattern::Cardio),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "burpees",
        name: "Burpees",
        aliases: &["burpee", "burpees"],
        muscle_groups: &["full body", "cardiovascular"],
        category: Category::Cardio,
        equipment: &[],
        movement_pattern: Some(MovementPattern::Cardio),
        difficulty: DifficultyLevel::Intermediate,
    },
    ExerciseDefinition {
        id: "jumping-jacks",
        name: "Jumping Jacks",
        aliases: &["jumping jack", "jumping jacks", "star jumps"],
        muscle_groups: &["legs", "arms", "cardiovascular"],
        category: Category::Cardio,
        equipment: &[],
        movement_pattern: Some(MovementPattern::Cardio),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "mountain-climbers",
        name: "Mountain Climbers",
        aliases: &["mountain climber", "mountain climbers"],
        muscle_groups: &["core", "legs", "cardiovascular"],
        category: Category::Cardio,
        equipment: &[],
        movement_pattern: Some(MovementPattern::Cardio),
        difficulty: DifficultyLevel::Intermediate,
    },
    // Yoga
    ExerciseDefinition {
        id: "downward-dog",
        name: "Downward Facing Dog",
        aliases: &[
            "downward dog",
            "down dog",
            "downward facing dog",
            "adho mukha svanasana",
        ],
        muscle_groups: &["shoulders", "hamstrings", "calves"],
        category: Category::Yoga,
        equipment: &["yoga mat"],
        movement_pattern: Some(MovementPattern::Flexibility),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "childs-pose",
        name: "Child's Pose",
        aliases: &["child pose", "childs pose", "balasana", "resting pose"],
        muscle_groups: &["back", "hips"],
        category: Category::Yoga,
        equipment: &["yoga mat"],
        movement_pattern: Some(MovementPattern::Flexibility),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "warrior-one",
        name: "Warrior I",
        aliases: &["warrior 1", "warrior one", "virabhadrasana 1"],
        muscle_groups: &["legs", "hips", "core"],
        category: Category::Yoga,
        equipment: &["yoga mat"],
        movement_pattern: Some(MovementPattern::Flexibility),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "warrior-two",
        name: "Warrior II",
        aliases: &["warrior 2", "warrior two", "virabhadrasana 2"],
        muscle_groups: &["legs", "hips", "core"],
        category: Category::Yoga,
        equipment: &["yoga mat"],
        movement_pattern: Some(MovementPattern::Flexibility),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "plank",
        name: "Plank",
        aliases: &["plank", "planks", "plank hold"],
        muscle_groups: &["core", "shoulders", "back"],
        category: Category::Yoga,
        equipment: &["yoga mat"],
        movement_pattern: Some(MovementPattern::Flexibility),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "cat-cow",
        name: "Cat-Cow Stretch",
        aliases: &["cat cow", "cat-cow", "cat cow stretch", "marjaryasana bitilasana"],
        muscle_groups: &["back", "spine"],
        category: Category::Yoga,
        equipment: &["yoga mat"],
        movement_pattern: Some(MovementPattern::Flexibility),
        difficulty: DifficultyLevel::Beginner,
    },
    // Stretching
    ExerciseDefinition {
        id: "hamstring-stretch",
        name: "Hamstring Stretch",
        aliases: &["hamstring stretch", "hamstring stretches", "ham stretch"],
        muscle_groups: &["hamstrings"],
        category: Category::Flexibility,
        equipment: &[],
        movement_pattern: Some(MovementPattern::Flexibility),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "quad-stretch",
        name: "Quadriceps Stretch",
        aliases: &["quad stretch", "quadriceps stretch", "thigh stretch"],
        muscle_groups: &["quadriceps"],
        category: Category::Flexibility,
        equipment: &[],
        movement_pattern: Some(MovementPattern::Flexibility),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "calf-stretch",
        name: "Calf Stretch",
        aliases: &["calf stretch", "calf stretches"],
        muscle_groups: &["calves"],
        category: Category::Flexibility,
        equipment: &[],
        movement_pattern: Some(MovementPattern::Flexibility),
        difficulty: DifficultyLevel::Beginner,
    },
    // Bodyweight
    ExerciseDefinition {
        id: "push-up",
        name: "Push-up",
        aliases: &["push up", "pushup", "push ups", "pushups"],
        muscle_groups: &["chest", "shoulders", "triceps"],
        category: Category::Strength,
        equipment: &[],
        movement_pattern: Some(MovementPattern::Push),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "sit-up",
        name: "Sit-up",
        aliases: &["sit up", "situp", "sit ups", "situps"],
        muscle_groups: &["core", "abs"],
        category: Category::Strength,
        equipment: &[],
        movement_pattern: Some(MovementPattern::Pull),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "lunge",
        name: "Lunge",
        aliases: &["lunge", "lunges", "forward lunge"],
        muscle_groups: &["quadriceps", "glutes", "hamstrings"],
        category: Category::Strength,
        equipment: &[],
        movement_pattern: Some(MovementPattern::Squat),
        difficulty: DifficultyLevel::Beginner,
    },
    // Machine exercises
    ExerciseDefinition {
        id: "leg-press",
        name: "Leg Press",
        aliases: &["leg press", "leg press machine"],
        muscle_groups: &["quadriceps", "glutes"],
        category: Category::Strength,
        equipment: &["leg press machine"],
        movement_pattern: Some(MovementPattern::Squat),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "lat-pulldown",
        name: "Lat Pulldown",
        aliases: &["lat pulldown", "lat pull down", "pulldown"],
        muscle_groups: &["lats", "biceps", "back"],
        category: Category::Strength,
        equipment: &["cable machine"],
        movement_pattern: Some(MovementPattern::Pull),
        difficulty: DifficultyLevel::Beginner,
    },
    ExerciseDefinition {
        id: "chest-fly",
        name: "Chest Fly",
        aliases: &["chest fly", "chest flies", "pec fly", "flyes"],
        muscle_groups: &["chest"],
        category: Category::Strength,
        equipment: &["dumbbells"],
        movement_pattern: Some(MovementPattern::Push),
        difficulty: DifficultyLevel::Beginner,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_exercises_unique_ids() {
        let mut ids = HashSet::new();

        for exercise in EXERCISES {
            assert!(ids.insert(exercise.id), "duplicate id {}", exercise.id);
        }
    }

    #[test]
    fn test_exercises_unambiguous_terms() {
        let mut terms: HashMap<String, &str> = HashMap::new();

        for exercise in EXERCISES {
            for term in [exercise.name].iter().chain(exercise.aliases) {
                let normalized = term.to_lowercase();
                if let Some(id) = terms.get(normalized.as_str()) {
                    assert_eq!(
                        *id, exercise.id,
                        "term \"{normalized}\" refers to two exercises"
                    );
                }
                terms.insert(normalized, exercise.id);
            }
        }
    }

    #[test]
    fn test_exercises_complete() {
        for exercise in EXERCISES {
            assert!(!exercise.id.is_empty());
            assert!(!exercise.name.is_empty());
            assert!(!exercise.aliases.is_empty(), "{} has no aliases", exercise.id);
            assert!(
                !exercise.muscle_groups.is_empty(),
                "{} has no muscle groups",
                exercise.id
            );
            assert!(exercise.aliases.iter().all(|a| !a.trim().is_empty()));
        }
    }

    #[test]
    fn test_by_id() {
        assert_eq!(
            by_id("bench-press-barbell").map(|e| e.name),
            Some("Barbell Bench Press")
        );
        assert_eq!(by_id("unknown-exercise"), None);
    }

    #[rstest]
    #[case(Category::Strength, "squat-back-barbell")]
    #[case(Category::Cardio, "treadmill-running")]
    #[case(Category::Flexibility, "hamstring-stretch")]
    #[case(Category::Yoga, "downward-dog")]
    fn test_by_category(#[case] category: Category, #[case] expected_member: &str) {
        let exercises = by_category(category);
        assert!(!exercises.is_empty());
        assert!(exercises.iter().all(|e| e.category == category));
        assert!(exercises.iter().any(|e| e.id == expected_member));
    }

    #[test]
    fn test_by_muscle_group() {
        let exercises = by_muscle_group("QUAD");
        assert!(exercises.iter().any(|e| e.id == "squat-back-barbell"));
        assert!(exercises.iter().any(|e| e.id == "quad-stretch"));
        assert!(by_muscle_group("antennae").is_empty());
    }

    #[test]
    fn test_by_equipment() {
        let exercises = by_equipment("Barbell");
        assert!(exercises.iter().any(|e| e.id == "bench-press-barbell"));
        assert!(exercises.iter().any(|e| e.id == "deadlift-conventional"));
        assert!(by_equipment("rowing machine").is_empty());
    }

    #[test]
    fn test_popular_easiest_first() {
        let exercises = popular(None, 100);
        let difficulties = exercises.iter().map(|e| e.difficulty).collect::<Vec<_>>();
        let mut sorted = difficulties.clone();
        sorted.sort_unstable();
        assert_eq!(difficulties, sorted);

        assert_eq!(popular(Some(Category::Cardio), 3).len(), 3);
        assert!(
            popular(Some(Category::Yoga), 100)
                .iter()
                .all(|e| e.category == Category::Yoga)
        );
    }

    #[test]
    fn test_suggested() {
        let exercises = suggested(&["chest"], &["bench-press-barbell"]);
        assert!(exercises.len() <= 5);
        assert!(exercises.iter().all(|e| e.id != "bench-press-barbell"));
        assert!(exercises.iter().any(|e| e.id == "push-up"));
    }

    #[test]
    fn test_complementary() {
        let exercises = complementary(&["bench-press-barbell"]);
        assert!(!exercises.is_empty());
        assert!(exercises.iter().all(|e| e.id != "bench-press-barbell"));
        // chest pairs with back, shoulders with lats, triceps with biceps
        assert!(exercises.iter().all(|e| {
            e.muscle_groups.contains(&"back")
                || e.muscle_groups.contains(&"lats")
                || e.muscle_groups.contains(&"biceps")
        }));
    }

    #[test]
    fn test_complementary_unknown_id() {
        assert!(complementary(&["unknown-exercise"]).is_empty());
    }
}
