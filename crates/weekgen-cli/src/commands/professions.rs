use weekgen_core::profession::PROFILES;
use weekgen_core::{Profession, ProfessionCategory};

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&PROFILES)?);
        return Ok(());
    }

    for category in ProfessionCategory::ALL {
        println!(
            "{} ({:02}:00-{:02}:00)",
            category.display_name(),
            category.start_hour(),
            category.end_hour()
        );
        for profession in Profession::in_category(category) {
            print_profession(profession);
        }
    }
    Ok(())
}

fn print_profession(profession: Profession) {
    let profile = profession.profile();
    println!(
        "  {:<12} after-hours {:.2}  weekend {:.2}",
        profession.id(),
        profile.after_hours_likelihood,
        profile.weekend_work_likelihood,
    );
    for activity in profile.activities {
        println!(
            "      {:<24} {:<14} {:.2}",
            activity.value.title,
            activity.value.kind.label(),
            activity.weight
        );
    }
}
