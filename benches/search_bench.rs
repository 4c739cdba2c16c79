use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use phrasemark::Store;

/// A resume-sized document.
const RESUME: &str = "Jim Smith,  Bleeker Street Houston, Texas 77034  (315) 555-5145  jimsmith@example.com  Objective: Seeking a position in an accounting field where I can utilize my skills and abilities in the field of tax oriented job that offers professional tax accountant.  Educational Details:  Bachelor of Science in Accounting University of Houston, 1989 Master of Science of Taxation University of New York, 1990  Master of Business Administration in Finance University of New York, 1992  Summary of Qualifications:  •  6+ years of tax and accounting experience.  •  Experience in establishing corporate tax department.  •  Experience working in global business environment.  •  Experience in using technology tools to leverage data, increase process and tax return efficiency, and complete work.  •  Able to research tax issues, apply practical tax experience.  Skills:  •  Excellent technical writing and editing skills.  •  Strong verbal communication skills.  •  Strong influencing skills across business functions.  •  Advanced computer skills.  •  Excellent accounting skills.  Computer Skills:  Lotus, Excel, Ami Pro, WordPerfect, ProComm Plus, Spreadsheet Auditor, Flowcharting III. Professional Experience:  Leading Commercial Printer, Houston, TX, 1996-2000 Tax Accountant  Responsibilities:  •  Prepared individual, partnership, corporate and other types of tax returns.  •  Did research on various tax matters.  •  Ensured that all sales and use tax returns are filed timely and accurately.  •  Prepared written communication for sales and use tax issues.  •  Collected information for all sales tax, use tax, and personal property tax audits.  •  Performed other duties as assigned.  Hipping Agency, Friendswood, TX, 1992-1995  Tax Staff Accountant  Responsibilities:  •  Established a 401K plan for company employees, enhancing the company's benefits package.  •  Prepared payroll, sales, use & property & commercial rent returns.  •  Responded to both client and government inquiries.  •  Devised the spreadsheet packages, financial statements and tax filings.  •  Ensured that all legal fees and push down entries for separate companies are recorded  ";

const WORDS: [&str; 24] = [
    "tax", "senior", "staff", "accountant", "business", "analyst", "data", "science",
    "houston", "new", "york", "texas", "manager", "software", "engineer", "excel",
    "corporate", "finance", "payroll", "audit", "sales", "lead", "product", "research",
];

/// Build a store with `per_group` synthetic phrases in each of three groups.
fn create_store(per_group: usize) -> Store {
    let store = Store::with_groups(["skills", "jobTitles", "locations"]);
    for (g, name) in ["skills", "jobTitles", "locations"].iter().enumerate() {
        let phrases: Vec<String> = (0..per_group)
            .map(|i| {
                let a = WORDS[(i + g) % WORDS.len()];
                let b = WORDS[(i / WORDS.len() + 3 * g) % WORDS.len()];
                match i % 3 {
                    0 => a.to_string(),
                    1 => format!("{} {}", a, b),
                    _ => format!("{} {} {}", a, b, i),
                }
            })
            .collect();
        store.add_str(name, phrases).unwrap();
    }
    store.add_str("jobTitles", ["Tax Accountant", "Tax Staff Accountant"]).unwrap();
    store.add_str("locations", ["Houston", "University of New York"]).unwrap();
    store
}

fn bench_search_all(c: &mut Criterion) {
    let text: Vec<char> = RESUME.chars().collect();
    let mut group = c.benchmark_group("search_all");

    for per_group in [1_000, 10_000, 100_000] {
        let store = create_store(per_group);
        group.bench_with_input(
            BenchmarkId::new("phrases_per_group", per_group),
            &text,
            |b, text| b.iter(|| store.search_all(black_box(text))),
        );
    }
    group.finish();
}

fn bench_search_batch(c: &mut Criterion) {
    let store = create_store(10_000);
    let texts: Vec<String> = (0..64).map(|_| RESUME.to_string()).collect();

    c.bench_function("search_batch_64", |b| {
        b.iter(|| store.search_batch(black_box(&texts)))
    });
}

criterion_group!(benches, bench_search_all, bench_search_batch);
criterion_main!(benches);
