pub trait Matrix<T>
where
    Self: Sized,
{
    fn from_list(lines: Vec<Vec<T>>) -> Self;
    fn to_list(&self) -> Vec<Vec<T>>;

    fn at(&self, row: usize, col: usize) -> T;

    // elementary row operations
    fn swap_rows(&mut self, a: usize, b: usize);
    fn divide_row(&mut self, row: usize, divisor: T);
    fn sub_scaled_row(&mut self, target: usize, source: usize, factor: T);
}
