use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use zmanim::ZmanimCalculator;

fn bench_single_day(c: &mut Criterion) {
    let calc = ZmanimCalculator::toronto();
    let friday = NaiveDate::from_ymd_opt(2024, 12, 13).unwrap();
    c.bench_function("compute_for_date", |b| {
        b.iter(|| calc.compute_for_date(black_box(friday)).unwrap())
    });
}

fn bench_week(c: &mut Criterion) {
    let calc = ZmanimCalculator::toronto();
    let sunday = NaiveDate::from_ymd_opt(2024, 12, 8).unwrap();
    c.bench_function("compute_for_week", |b| {
        b.iter(|| calc.compute_for_week(black_box(sunday)).unwrap())
    });
}

fn bench_upcoming_shabbat(c: &mut Criterion) {
    let calc = ZmanimCalculator::toronto();
    let wednesday = NaiveDate::from_ymd_opt(2024, 12, 11).unwrap();
    c.bench_function("upcoming_shabbat", |b| {
        b.iter(|| calc.upcoming_shabbat(black_box(wednesday)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_single_day,
    bench_week,
    bench_upcoming_shabbat
);
criterion_main!(benches);
