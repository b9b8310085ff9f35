use matprod::{Error, Matrix};

#[test]
fn test_new_is_zeroed_with_fixed_shape() {
    let m = Matrix::new(3, 5);
    assert_eq!((m.rows(), m.cols()), (3, 5));
    assert_eq!(m.as_slice().len(), 15);
    assert!(m.as_slice().iter().all(|&x| x == 0.0));
}

#[test]
fn test_row_major_layout() {
    let mut m = Matrix::new(2, 3);
    m.set(1, 2, 7.0);
    m[(0, 1)] = 4.0;

    assert_eq!(m.as_slice(), &[0.0, 4.0, 0.0, 0.0, 0.0, 7.0]);
    assert_eq!(m.row(1), &[0.0, 0.0, 7.0]);
    assert_eq!(m.get(0, 1), 4.0);
    assert_eq!(m[(1, 2)], 7.0);

    m.row_mut(0).copy_from_slice(&[1.0, 2.0, 3.0]);
    assert_eq!(m.row(0), &[1.0, 2.0, 3.0]);
}

#[test]
#[should_panic]
fn test_row_out_of_range_panics() {
    let m = Matrix::new(2, 2);
    let _ = m.row(2);
}

#[test]
fn test_from_vec_checks_length() {
    assert!(Matrix::from_vec(2, 3, vec![0.0; 6]).is_ok());
    match Matrix::from_vec(2, 3, vec![0.0; 5]) {
        Err(Error::DataLength { rows, cols, len }) => assert_eq!((rows, cols, len), (2, 3, 5)),
        other => panic!("expected DataLength, got {:?}", other),
    }
}

#[test]
fn test_identity() {
    let i3 = Matrix::identity(3);
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(i3[(r, c)], if r == c { 1.0 } else { 0.0 });
        }
    }
}

#[test]
fn test_exact_equality() {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    let mut b = a.clone();
    assert_eq!(a, b);

    b[(1, 1)] = 4.0 + 1e-12;
    assert_ne!(a, b);

    // Same elements, different shape.
    let flat = Matrix::from_vec(1, 4, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_ne!(a, flat);
}

#[test]
fn test_approx_equality() {
    let a = Matrix::from_vec(1, 3, vec![1e6, 1.0, 0.0]).unwrap();
    let close = Matrix::from_vec(1, 3, vec![1e6 + 1e-4, 1.0 + 1e-10, 1e-10]).unwrap();
    let far = Matrix::from_vec(1, 3, vec![1e6, 1.0 + 1e-6, 0.0]).unwrap();

    assert!(a.approx_eq(&close, 1e-9));
    assert!(!a.approx_eq(&far, 1e-9));
    assert!(!a.approx_eq(&Matrix::new(3, 1), 1e-9));
}

#[test]
fn test_max_abs_diff() {
    let a = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
    let b = Matrix::from_vec(1, 3, vec![1.5, 2.0, 1.0]).unwrap();
    assert_eq!(a.max_abs_diff(&b), Some(2.0));
    assert_eq!(a.max_abs_diff(&Matrix::new(3, 1)), None);
}

#[test]
fn test_fill_and_display() {
    let mut m = Matrix::new(2, 2);
    m.fill(1.5);
    assert_eq!(m, Matrix::filled(2, 2, 1.5));

    let text = m.to_string();
    assert_eq!(text.lines().count(), 2);
    assert!(text.contains("1.5000"));
}
