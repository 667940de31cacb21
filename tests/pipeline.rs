use lloyd_kmeans::{validate, write_centroids, ClusterError, DataSet};

fn render(input: &str, k: usize, max_iter: usize) -> Result<String, ClusterError> {
    let ds = DataSet::from_reader(input.as_bytes()).unwrap();
    let centroids = ds.kmeans(k, max_iter)?;
    let mut out = Vec::new();
    write_centroids(&mut out, centroids.view()).unwrap();
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_single_dimension_output() {
    let out = render("1\n2\n3\n10\n11\n12\n", 2, 10).unwrap();
    assert_eq!(out, "2.0000\n11.0000\n");
}

#[test]
fn test_two_dimension_output() {
    let out = render("0,0\n10,0\n\n0,1\n10,1\n", 2, 10).unwrap();
    assert_eq!(out, "0.0000,0.5000\n10.0000,0.5000\n");
}

#[test]
fn test_every_line_has_d_fields_with_four_decimals() {
    let input = "0.123456789,1,2.5\n3,4.75,5\n100,200,300\n101.1,199.9,300.2\n0.5,1.5,2\n";
    let out = render(input, 2, 100).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    for line in lines {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 3);
        for field in fields {
            let (_, decimals) = field.split_once('.').unwrap();
            assert_eq!(decimals.len(), 4);
        }
    }
}

#[test]
fn test_validation_errors_surface() {
    assert!(matches!(
        render("1\n2\n3\n", 1, 10),
        Err(ClusterError::InvalidClusterCount { .. })
    ));
    assert!(matches!(
        render("1\n2\n3\n", 3, 10),
        Err(ClusterError::InvalidClusterCount { .. })
    ));
    assert!(matches!(
        render("1\n2\n3\n", 2, 1000),
        Err(ClusterError::InvalidIterationCount { .. })
    ));
    assert!(validate(2, 3, 999).is_ok());
}
