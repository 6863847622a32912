use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tyche::adapters::mock_generator::{generate_from_schema, generate_multiple_from_schema};
use tyche::adapters::schema_descriptor::schema_to_descriptor;
use tyche::domain::{Field, FieldType};

fn order_schema() -> Vec<Field> {
    vec![
        Field {
            name: "orderId".to_string(),
            field_type: FieldType::Number,
            is_primary_key: true,
            ..Field::default()
        },
        Field {
            name: "customer".to_string(),
            field_type: FieldType::Object,
            children: Some(vec![
                Field {
                    name: "name".to_string(),
                    field_type: FieldType::String,
                    ..Field::default()
                },
                Field {
                    name: "email".to_string(),
                    field_type: FieldType::String,
                    ..Field::default()
                },
            ]),
            ..Field::default()
        },
        Field {
            name: "items".to_string(),
            field_type: FieldType::Array,
            array_item_type: Some(FieldType::Object),
            array_item_schema: Some(vec![
                Field {
                    name: "sku".to_string(),
                    field_type: FieldType::String,
                    ..Field::default()
                },
                Field {
                    name: "quantity".to_string(),
                    field_type: FieldType::Number,
                    ..Field::default()
                },
            ]),
            ..Field::default()
        },
        Field {
            name: "orderedAt".to_string(),
            field_type: FieldType::Date,
            ..Field::default()
        },
    ]
}

fn benchmark_generate_single(c: &mut Criterion) {
    let schema = order_schema();

    c.bench_function("generate_single", |b| {
        b.iter(|| generate_from_schema(black_box(&schema)));
    });
}

fn benchmark_generate_batch(c: &mut Criterion) {
    let schema = order_schema();
    let mut group = c.benchmark_group("generate_batch");

    for count in [10usize, 100usize] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| generate_multiple_from_schema(black_box(&schema), count));
        });
    }

    group.finish();
}

fn benchmark_descriptor(c: &mut Criterion) {
    let schema = order_schema();

    c.bench_function("schema_descriptor", |b| {
        b.iter(|| schema_to_descriptor(black_box(&schema)));
    });
}

criterion_group!(
    benches,
    benchmark_generate_single,
    benchmark_generate_batch,
    benchmark_descriptor
);
criterion_main!(benches);
